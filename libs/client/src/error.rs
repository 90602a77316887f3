use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised while talking to the catalog API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message} ({status})")]
    Api { status: StatusCode, message: String },

    #[error("Response carried no data")]
    MissingData,
}

impl ClientError {
    /// The server's own message when it sent one, the error text otherwise
    pub fn message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(error) => error.status(),
            ClientError::MissingData => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
