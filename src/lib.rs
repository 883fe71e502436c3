pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpGraphQlClient;
pub use api::{create_router, AppState};
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::relay::Relay;
pub use utils::error::{RelayError, Result};
