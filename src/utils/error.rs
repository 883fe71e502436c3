use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid request body: {message}")]
    InvalidRequest { status: u16, message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl RelayError {
    /// Status code to report to the caller of the relay.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::UpstreamStatus { status, .. } => *status,
            RelayError::InvalidRequest { status, .. } => *status,
            RelayError::ApiError(_) => 502,
            _ => 500,
        }
    }

    /// Text placed in the `detail` field of an error response.
    pub fn detail(&self) -> String {
        match self {
            RelayError::UpstreamStatus { body, .. } => body.clone(),
            RelayError::InvalidRequest { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
