use std::env;

pub const DEFAULT_API_ENDPOINT: &str = "https://filecoin.coin.ledger.com";
pub const DEFAULT_CURRENCY_ID: &str = "filecoin";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_endpoint: String,
    pub address: String,
    pub currency_id: String,
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("missing FILECOIN_ADDRESS env var")]
    MissingAddress,
}

impl Config {
    /// Read configuration from the environment, loading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let address = parse_address(env::var("FILECOIN_ADDRESS").ok())?;
        let api_endpoint =
            env::var("FILECOIN_API_ENDPOINT").unwrap_or_else(|_| DEFAULT_API_ENDPOINT.to_string());
        let currency_id =
            env::var("FILECOIN_CURRENCY_ID").unwrap_or_else(|_| DEFAULT_CURRENCY_ID.to_string());

        Ok(Self {
            api_endpoint,
            address,
            currency_id,
        })
    }
}

fn parse_address(raw: Option<String>) -> Result<String, ConfigError> {
    raw.map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty())
        .ok_or(ConfigError::MissingAddress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address(Some(" f1abc ".to_string())).unwrap(), "f1abc");
        assert!(matches!(parse_address(None), Err(ConfigError::MissingAddress)));
        assert!(matches!(
            parse_address(Some("   ".to_string())),
            Err(ConfigError::MissingAddress)
        ));
    }
}
