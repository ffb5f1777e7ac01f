use serde::{Deserialize, Serialize};

/// Address fields filled in from a CEP lookup. The default (all empty) is the
/// state shown when the CEP is unknown or the lookup failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.neighborhood.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
    }
}

// Payload devolvido pelo serviço de CEP
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CepResponse {
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub bairro: String,
    #[serde(default)]
    pub localidade: String,
    #[serde(default)]
    pub uf: String,
    // o serviço já respondeu tanto `true` quanto `"true"`
    #[serde(default)]
    pub erro: Option<serde_json::Value>,
}

impl CepResponse {
    pub fn is_error(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// `None` when the service flagged the CEP as unknown.
    pub fn into_address(self) -> Option<Address> {
        if self.is_error() {
            return None;
        }

        Some(Address {
            street: self.logradouro,
            neighborhood: self.bairro,
            city: self.localidade,
            state: self.uf,
        })
    }
}
