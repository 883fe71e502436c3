use crate::config::{DEFAULT_BIND, DEFAULT_ESTIMATION_ENDPOINT, DEFAULT_SEARCH_ENDPOINT};
use crate::core::ConfigProvider;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{validate_socket_addr, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_search_endpoint")]
    pub search_endpoint: String,
    #[serde(default = "default_estimation_endpoint")]
    pub estimation_endpoint: String,
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_search_endpoint() -> String {
    DEFAULT_SEARCH_ENDPOINT.to_string()
}

fn default_estimation_endpoint() -> String {
    DEFAULT_ESTIMATION_ENDPOINT.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            search_endpoint: default_search_endpoint(),
            estimation_endpoint: default_estimation_endpoint(),
        }
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RelayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RelayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value of the environment variable.
    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RelayError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_addr(&self) -> &str {
        &self.server.bind
    }

    fn search_endpoint(&self) -> &str {
        &self.upstream.search_endpoint
    }

    fn estimation_endpoint(&self) -> &str {
        &self.upstream.estimation_endpoint
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("server.bind", &self.server.bind)?;
        validate_url("upstream.search_endpoint", &self.upstream.search_endpoint)?;
        validate_url(
            "upstream.estimation_endpoint",
            &self.upstream.estimation_endpoint,
        )?;
        Ok(())
    }
}
