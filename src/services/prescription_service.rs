use super::client::{ApiClient, ApiOutcome, write_outcome};
use crate::domain::Prescription;

#[derive(Clone)]
pub struct PrescriptionService {
    api: ApiClient,
}

impl PrescriptionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn save(&self, prescription: &Prescription, token: &str) -> ApiOutcome {
        let result = self
            .api
            .post_json(&format!("/prescription/{token}"), prescription)
            .await;
        write_outcome(
            result,
            "save prescription",
            "Prescription saved successfully",
            "Failed to save prescription",
        )
        .await
    }
}
