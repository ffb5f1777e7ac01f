//! Masking and validation of the vehicle sale form fields: license plate,
//! RENAVAM, amounts in reais and CEP, plus the CEP address lookup.

pub mod app;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{ConfigError, FieldError, LookupError, PricingError};
pub use models::{Address, FieldKind, FieldOutput, FormatterSession};
