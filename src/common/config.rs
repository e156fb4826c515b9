//! Runtime configuration for the API endpoint, token storage, and message
//! timing. Values come from CLI flags or their `MERGINGTON_*` environment
//! fallbacks; blank values are ignored so the defaults apply. Configuration
//! values are public; do not store secrets here.

use super::errors::AppError;
use std::{path::PathBuf, time::Duration};
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// How long a success or error message stays visible.
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_secs(5);

const STORAGE_DIR: &str = "mergington";
const STORAGE_FILE: &str = "local_storage.json";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: Url,
    pub storage_path: PathBuf,
    pub message_ttl: Duration,
    /// `None` keeps the HTTP client's default (no timeout).
    pub request_timeout: Option<Duration>,
}

impl AppConfig {
    /// Builds a config for `api_base_url` with default storage and timing.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the URL is not an absolute http(s) URL.
    pub fn new(api_base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            storage_path: default_storage_path(),
            message_ttl: DEFAULT_MESSAGE_TTL,
            request_timeout: None,
        })
    }

    #[must_use]
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    #[must_use]
    pub const fn with_message_ttl(mut self, ttl: Duration) -> Self {
        self.message_ttl = ttl;
        self
    }

    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// Platform config dir, falling back to the working directory.
#[must_use]
pub fn default_storage_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STORAGE_DIR)
        .join(STORAGE_FILE)
}

/// Trims a raw value and rejects blanks.
#[must_use]
pub fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_base_url(value: &str) -> Result<Url, AppError> {
    let value = normalize_value(value).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let url = Url::parse(&value)
        .map_err(|err| AppError::Config(format!("Invalid API base URL {value}: {err}")))?;

    match url.scheme() {
        "http" | "https" if !url.cannot_be_a_base() => Ok(url),
        scheme => Err(AppError::Config(format!(
            "Unsupported API base URL scheme: {scheme}"
        ))),
    }
}
