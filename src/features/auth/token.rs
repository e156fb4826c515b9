//! Bearer token persistence under the `auth_token` storage key.
//! Storage failures are logged and never surface to the page.

use crate::common::{AppError, LocalStorage};
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Reads the persisted token. Unreadable storage counts as no token.
pub fn load_token(storage: &dyn LocalStorage) -> Option<SecretString> {
    match storage.get_item(AUTH_TOKEN_KEY) {
        Ok(Some(token)) if !token.trim().is_empty() => Some(SecretString::from(token)),
        Ok(_) => None,
        Err(err) => {
            warn!("Failed to read persisted token: {err}");
            None
        }
    }
}

/// # Errors
/// Returns `AppError::Storage` if the token cannot be written.
pub fn persist_token(storage: &dyn LocalStorage, token: &SecretString) -> Result<(), AppError> {
    storage.set_item(AUTH_TOKEN_KEY, token.expose_secret())
}

/// # Errors
/// Returns `AppError::Storage` if the token cannot be removed.
pub fn forget_token(storage: &dyn LocalStorage) -> Result<(), AppError> {
    storage.remove_item(AUTH_TOKEN_KEY)
}
