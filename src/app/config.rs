use crate::error::ConfigError;
use serde::Deserialize;
use std::env;
use std::path::Path;
use url::Url;

const DEFAULT_CEP_API_URL: &str = "https://viacep.com.br/ws";
const DEFAULT_CEP_TIMEOUT_MS: u64 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Compact,
    #[default]
    Full,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cep_api_url: String,
    pub cep_timeout_ms: u64,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cep_api_url: DEFAULT_CEP_API_URL.to_string(),
            cep_timeout_ms: DEFAULT_CEP_TIMEOUT_MS,
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// File values (when a path is given) with environment variables on top.
    /// Validation runs once, after the overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config: Config = match path {
            Some(path) => toml::from_str(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        self.cep_api_url = env::var("CEP_API_URL").unwrap_or_else(|_| self.cep_api_url.clone());
        self.cep_timeout_ms = env::var("CEP_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(self.cep_timeout_ms);
        self.log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("compact") => LogFormat::Compact,
            Ok("full") => LogFormat::Full,
            _ => self.log_format,
        };
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cep_base_url()?;
        if self.cep_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "cep_timeout_ms",
                value: self.cep_timeout_ms.to_string(),
            });
        }
        Ok(())
    }

    pub fn cep_base_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.cep_api_url).map_err(|source| ConfigError::InvalidUrl {
            value: self.cep_api_url.clone(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.cep_api_url, "https://viacep.com.br/ws");
        assert_eq!(config.cep_timeout_ms, 5000);
        assert_eq!(config.log_format, LogFormat::Full);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "cep_api_url = \"http://localhost:8080/ws\"\ncep_timeout_ms = 1500\nlog_format = \"compact\""
        )
        .unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.cep_api_url, "http://localhost:8080/ws");
        assert_eq!(config.cep_timeout_ms, 1500);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str("cep_timeout_ms = 250").unwrap();
        assert_eq!(config.cep_api_url, "https://viacep.com.br/ws");
        assert_eq!(config.cep_timeout_ms, 250);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Config::from_toml_str("cep_api_url = \"not a url\""),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("cep_api_url = \"ftp://example.com\""),
            Err(ConfigError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            Config::from_toml_str("cep_timeout_ms = 0"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            Config::from_toml_str("cep_timeout_ms = \"fast\""),
            Err(ConfigError::Toml { .. })
        ));
    }

    #[test]
    fn test_env_overrides_invalid_file_value() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cep_timeout_ms = 0").unwrap();

        // nenhum outro teste lê CEP_TIMEOUT_MS
        std::env::set_var("CEP_TIMEOUT_MS", "3000");
        let loaded = Config::load(Some(file.path()));
        std::env::remove_var("CEP_TIMEOUT_MS");

        assert_eq!(loaded.unwrap().cep_timeout_ms, 3000);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::from_toml_file("/nonexistent/revenda.toml"),
            Err(ConfigError::Io { .. })
        ));
    }
}
