use crate::app::config::Config;
use crate::error::LookupError;
use crate::models::address::{Address, CepResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Source of addresses for a complete CEP. `Ok(None)` means the CEP is not
/// known to the provider.
#[async_trait]
pub trait AddressProvider: Send + Sync {
    async fn lookup(&self, cep: &str) -> Result<Option<Address>, LookupError>;
}

/// Client for the public ViaCEP-style API: `GET {base}/{cep}/json/`.
/// No authentication and no retries.
pub struct ViaCepClient {
    client: Client,
    base_url: Url,
}

impl ViaCepClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, LookupError> {
        Self::new(
            config.cep_base_url()?,
            Duration::from_millis(config.cep_timeout_ms),
        )
    }

    pub fn endpoint(&self, cep: &str) -> Result<Url, LookupError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}/json/", base, cep))?)
    }
}

#[async_trait]
impl AddressProvider for ViaCepClient {
    async fn lookup(&self, cep: &str) -> Result<Option<Address>, LookupError> {
        let url = self.endpoint(cep)?;
        debug!("Requesting CEP {} from {}", cep, url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let payload: CepResponse = serde_json::from_slice(&body)?;
        let address = payload.into_address();

        info!("CEP {} lookup finished (found: {})", cep, address.is_some());
        Ok(address)
    }
}
