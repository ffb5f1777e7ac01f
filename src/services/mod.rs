pub mod cep_client;
pub mod cep_field;
pub mod form;

pub use cep_client::{AddressProvider, ViaCepClient};
pub use cep_field::{CepField, CepInput, LookupHandle, LookupOutcome, NotFoundCallback};
pub use form::{FormIssue, FormReport};
