//! Client wrappers for the activities endpoints.

use super::types::{ActionMessage, ActivityBook};
use crate::common::{ApiClient, AppError};
use secrecy::SecretString;

/// # Errors
/// Returns transport, HTTP, or decode errors.
pub async fn fetch_activities(api: &ApiClient) -> Result<ActivityBook, AppError> {
    let url = api.endpoint(&["activities"], &[])?;
    api.get_json(url, None).await
}

/// Adds `email` to the roster of `activity`. No auth required.
///
/// # Errors
/// Returns `AppError::Http` with the server `detail` (unknown activity, already signed up).
pub async fn signup(api: &ApiClient, activity: &str, email: &str) -> Result<ActionMessage, AppError> {
    let url = api.endpoint(&["activities", activity, "signup"], &[("email", email)])?;
    api.post_json(url).await
}

/// Removes `email` from the roster of `activity`. Teachers only.
///
/// # Errors
/// Returns `AppError::Http` with the server `detail` (401 without a valid token).
pub async fn unregister(
    api: &ApiClient,
    activity: &str,
    email: &str,
    token: &SecretString,
) -> Result<ActionMessage, AppError> {
    let url = api.endpoint(&["activities", activity, "unregister"], &[("email", email)])?;
    api.delete_json(url, Some(token)).await
}
