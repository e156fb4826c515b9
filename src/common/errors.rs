use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Request failed ({status}): {message}")]
    Http {
        status: u16,
        message: String,
        detail: Option<String>,
    },

    #[error("Response error: {0}")]
    Parse(String),

    #[error("Request error: {0}")]
    Serialization(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Server-provided `detail` for non-success responses.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Http { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when the request never produced an HTTP response.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Timeout(_))
    }

    /// Message shown to the visitor: the server detail when there is one, else `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}
