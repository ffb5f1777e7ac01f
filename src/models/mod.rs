pub mod address;
pub mod field;
pub mod session;

pub use address::Address;
pub use field::{FieldKind, FieldOutput};
pub use session::{FormatterSession, PlateInput};
