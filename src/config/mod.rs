pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_socket_addr, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://zeusptest.housing.com/api/gql/cache-first?apiName=TYPE_AHEAD_API&emittedFrom=client_buy_COST_VALUATION&isBot=false&source=web";
pub const DEFAULT_ESTIMATION_ENDPOINT: &str = "https://zeusptest.housing.com/api/gql?apiName=PRICE_ESTIMATION&emittedFrom=client_buy_COST_VALUATION&isBot=false&source=web";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "locality-relay"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Relays locality search and price estimation requests to the housing GraphQL API")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_BIND))]
    pub bind: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_SEARCH_ENDPOINT))]
    pub search_endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_ESTIMATION_ENDPOINT))]
    pub estimation_endpoint: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Load settings from a TOML file instead"))]
    pub config: Option<String>,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,

    #[cfg_attr(feature = "cli", arg(long, help = "Emit logs as JSON lines"))]
    pub log_json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            estimation_endpoint: DEFAULT_ESTIMATION_ENDPOINT.to_string(),
            config: None,
            verbose: false,
            log_json: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn bind_addr(&self) -> &str {
        &self.bind
    }

    fn search_endpoint(&self) -> &str {
        &self.search_endpoint
    }

    fn estimation_endpoint(&self) -> &str {
        &self.estimation_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind", &self.bind)?;
        validate_url("search_endpoint", &self.search_endpoint)?;
        validate_url("estimation_endpoint", &self.estimation_endpoint)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert!(config.search_endpoint().contains("apiName=TYPE_AHEAD_API"));
        assert!(config.estimation_endpoint().contains("apiName=PRICE_ESTIMATION"));
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let config = CliConfig {
            estimation_endpoint: "not a url".to_string(),
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_flags_override_defaults() {
        let config = CliConfig::parse_from([
            "locality-relay",
            "--bind",
            "127.0.0.1:9000",
            "--search-endpoint",
            "http://localhost:4000/gql",
            "--verbose",
        ]);

        assert_eq!(config.bind, "127.0.0.1:9000");
        assert_eq!(config.search_endpoint, "http://localhost:4000/gql");
        assert_eq!(config.estimation_endpoint, DEFAULT_ESTIMATION_ENDPOINT);
        assert!(config.verbose);
        assert!(!config.log_json);
        assert!(config.config.is_none());
    }
}
