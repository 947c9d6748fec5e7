use reqwest::Response;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use crate::config::ApiConfig;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),
}

/// Structured result of a write operation, surfaced to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiOutcome {
    pub success: bool,
    pub message: String,
}

/// Body shape of login responses; callers extract the token themselves.
#[derive(Debug, Deserialize)]
pub struct TokenBody {
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

/// Thin wrapper around the HTTP client plus the configured base URL.
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET expecting a JSON body; non-success statuses are errors so the
    /// caller can degrade to its empty value.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn post_json(
        &self,
        path: &str,
        body: &impl serde::Serialize,
    ) -> Result<Response, ApiError> {
        Ok(self.http.post(self.url(path)).json(body).send().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<Response, ApiError> {
        Ok(self.http.delete(self.url(path)).send().await?)
    }
}

/// Normalize a user-supplied filter value for path interpolation: blank
/// means unconstrained, which the backend spells as the literal "null".
pub(crate) fn sentinel(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "null".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Collapse a write response into `{success, message}`. Network failure
/// and an unreadable body both fall back to the supplied strings; the
/// caller never sees an error value.
pub(crate) async fn write_outcome(
    result: Result<Response, ApiError>,
    operation: &str,
    ok_fallback: &str,
    err_fallback: &str,
) -> ApiOutcome {
    match result {
        Ok(response) => {
            let success = response.status().is_success();
            let fallback = if success { ok_fallback } else { err_fallback };
            let message = response
                .json::<MessageBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| fallback.to_string());
            ApiOutcome { success, message }
        }
        Err(err) => {
            error!(operation, error = %err, "write request failed");
            ApiOutcome {
                success: false,
                message: err_fallback.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_replaces_blank_values() {
        assert_eq!(sentinel(""), "null");
        assert_eq!(sentinel("   "), "null");
        assert_eq!(sentinel("ENT"), "ENT");
        assert_eq!(sentinel("  09:00 "), "09:00");
    }

    #[test]
    fn urls_join_base_and_path() {
        let client = ApiClient::new(&ApiConfig::new("http://localhost:8080"));
        assert_eq!(client.url("/doctor"), "http://localhost:8080/doctor");
        assert_eq!(
            client.url("/doctor/filter/null/null/null"),
            "http://localhost:8080/doctor/filter/null/null/null"
        );
    }
}
