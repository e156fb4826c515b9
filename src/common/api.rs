//! HTTP helpers for the school JSON API with consistent error handling. Feature
//! clients use these helpers to avoid duplicating request setup. The helpers do
//! not store tokens; they only attach the bearer token a caller passes in.

use super::{config::AppConfig, errors::AppError};
use crate::APP_USER_AGENT;
use reqwest::{Client, Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{Instrument, debug, info_span};
use url::Url;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Client bound to one API base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// # Errors
    /// Returns `AppError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(APP_USER_AGENT);
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds an endpoint URL from raw path segments and query pairs.
    /// Segments are percent-encoded, so activity names may contain spaces or slashes.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL cannot carry a path.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|()| AppError::Config(format!("Invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Fetches JSON, optionally with bearer auth.
    ///
    /// # Errors
    /// Returns transport, HTTP status, or decode errors.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        bearer: Option<&SecretString>,
    ) -> Result<T, AppError> {
        let builder = self.request(Method::GET, url.clone(), bearer);
        let response = send(builder, &Method::GET, &url).await?;
        handle_json_response(response).await
    }

    /// Posts a url-encoded form and parses a JSON response.
    ///
    /// # Errors
    /// Returns transport, HTTP status, or decode errors.
    pub async fn post_form_json<B, T>(&self, url: Url, form: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, url.clone(), None).form(form);
        let response = send(builder, &Method::POST, &url).await?;
        handle_json_response(response).await
    }

    /// Posts an empty body and parses a JSON response.
    ///
    /// # Errors
    /// Returns transport, HTTP status, or decode errors.
    pub async fn post_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        let builder = self.request(Method::POST, url.clone(), None);
        let response = send(builder, &Method::POST, &url).await?;
        handle_json_response(response).await
    }

    /// Sends a DELETE, optionally with bearer auth, and parses a JSON response.
    ///
    /// # Errors
    /// Returns transport, HTTP status, or decode errors.
    pub async fn delete_json<T: DeserializeOwned>(
        &self,
        url: Url,
        bearer: Option<&SecretString>,
    ) -> Result<T, AppError> {
        let builder = self.request(Method::DELETE, url.clone(), bearer);
        let response = send(builder, &Method::DELETE, &url).await?;
        handle_json_response(response).await
    }

    fn request(&self, method: Method, url: Url, bearer: Option<&SecretString>) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match bearer {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }
}

async fn send(builder: RequestBuilder, method: &Method, url: &Url) -> Result<Response, AppError> {
    let span = info_span!(
        "api.request",
        http.method = %method,
        url.path = %url.path()
    );
    let response = builder
        .send()
        .instrument(span)
        .await
        .map_err(map_request_error)?;

    debug!("{} {} -> {}", method, url.path(), response.status());

    Ok(response)
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with the server `detail`.
async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();

    if status.is_success() {
        let body = response.bytes().await.map_err(map_request_error)?;
        serde_json::from_slice(&body)
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(AppError::Http {
            status: status.as_u16(),
            detail: extract_detail(&body),
            message: sanitize_body(&body),
        })
    }
}

/// Pulls a string `detail` field out of an error body.
/// Structured details (validation error lists) are not user-facing.
fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .map(ToString::to_string)
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&AppConfig::new(base).unwrap()).unwrap()
    }

    #[test]
    fn endpoint_encodes_segments_and_query() {
        let api = client("http://school.test:8000");
        let url = api
            .endpoint(
                &["activities", "Chess Club", "signup"],
                &[("email", "new student@mergington.edu")],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://school.test:8000/activities/Chess%20Club/signup?email=new+student%40mergington.edu"
        );
    }

    #[test]
    fn endpoint_escapes_slashes_in_names() {
        let api = client("http://school.test");
        let url = api
            .endpoint(&["activities", "Math/Science", "unregister"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://school.test/activities/Math%2FScience/unregister"
        );
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let api = client("http://school.test/api/");
        let url = api.endpoint(&["auth", "me"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://school.test/api/auth/me");

        let api = client("http://school.test/api");
        let url = api.endpoint(&["activities"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://school.test/api/activities");
    }

    #[test]
    fn extract_detail_reads_string_detail_only() {
        assert_eq!(
            extract_detail(r#"{"detail":"Activity not found"}"#),
            Some("Activity not found".to_string())
        );
        assert_eq!(
            extract_detail(r#"{"detail":[{"loc":["query","email"],"msg":"field required"}]}"#),
            None
        );
        assert_eq!(extract_detail(r#"{"detail":"  "}"#), None);
        assert_eq!(extract_detail("Internal Server Error"), None);
    }

    #[test]
    fn sanitize_body_trims_and_truncates() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body("  oops \n"), "oops");
        let long = "x".repeat(MAX_ERROR_CHARS + 50);
        assert_eq!(sanitize_body(&long).chars().count(), MAX_ERROR_CHARS);
    }
}
