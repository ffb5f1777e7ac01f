use thiserror::Error;

/// Motivo de rejeição de um campo. O `Display` é a mensagem exibida inline
/// pelo formulário.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Campo obrigatório")]
    Required,

    #[error("Placa inválida (use AAA-9999 ou AAA9A99)")]
    InvalidPlate,

    #[error("RENAVAM deve ter 11 dígitos")]
    InvalidRenavam,

    #[error("Valor deve ser maior que zero")]
    ZeroAmount,

    #[error("Valor máximo é R$ 999.999.999")]
    AmountTooLarge,

    #[error("CEP deve ter 8 dígitos")]
    InvalidCep,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Preço de venda ({sale}) menor que o preço de compra ({purchase})")]
    SaleBelowPurchase { purchase: u64, sale: u64 },

    #[error("Entrada mínima ({min_down}) maior que o preço de venda ({sale})")]
    DownPaymentAboveSale { min_down: u64, sale: u64 },
}

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("CEP lookup request failed: {source}")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("CEP lookup returned HTTP {0}")]
    Status(u16),

    #[error("Invalid CEP lookup response: {source}")]
    Decode {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid CEP lookup URL: {source}")]
    Url {
        #[from]
        source: url::ParseError,
    },

    #[error("CEP address provider panicked")]
    ProviderPanicked,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Config file parse error: {source}")]
    Toml {
        #[from]
        source: toml::de::Error,
    },

    #[error("Invalid CEP_API_URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        source: url::ParseError,
    },

    #[error("Unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}
