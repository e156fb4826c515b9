//! Client wrappers for the auth endpoints. These keep header and form handling
//! in one place so page code never touches raw credentials.

use super::types::{LoginForm, LoginResponse, Teacher};
use crate::common::{ApiClient, AppError};
use secrecy::{ExposeSecret, SecretString};

/// Validates a bearer token and returns the teacher it belongs to.
///
/// # Errors
/// Returns `AppError::Http` (usually 401) when the token is rejected.
pub async fn fetch_current_teacher(
    api: &ApiClient,
    token: &SecretString,
) -> Result<Teacher, AppError> {
    let url = api.endpoint(&["auth", "me"], &[])?;
    api.get_json(url, Some(token)).await
}

/// Exchanges teacher credentials for a bearer token.
/// The password is only exposed while building the form body.
///
/// # Errors
/// Returns `AppError::Http` (usually 401 with a `detail`) on bad credentials.
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &SecretString,
) -> Result<LoginResponse, AppError> {
    let url = api.endpoint(&["auth", "login"], &[])?;
    let form = LoginForm {
        email,
        password: password.expose_secret(),
    };
    api.post_form_json(url, &form).await
}
