use reqwest::Response;
use tracing::error;

use super::client::ApiClient;
use crate::domain::AdminCredentials;

#[derive(Clone)]
pub struct AdminService {
    api: ApiClient,
}

impl AdminService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Admin login; the caller checks the status and extracts the token.
    pub async fn login(&self, credentials: &AdminCredentials) -> Option<Response> {
        match self.api.post_json("/admin", credentials).await {
            Ok(response) => Some(response),
            Err(err) => {
                error!(error = %err, "admin login request failed");
                None
            }
        }
    }
}
