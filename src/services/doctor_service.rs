use reqwest::Response;
use serde::Deserialize;
use tracing::error;

use super::client::{ApiClient, ApiOutcome, sentinel, write_outcome};
use crate::domain::{Doctor, DoctorForm, LoginRequest};

#[derive(Debug, Deserialize)]
struct DoctorList {
    #[serde(default)]
    doctors: Vec<Doctor>,
}

#[derive(Clone)]
pub struct DoctorService {
    api: ApiClient,
}

impl DoctorService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch the unfiltered doctor list. Failures degrade to an empty
    /// list so the view renders its placeholder instead of breaking.
    pub async fn list(&self) -> Vec<Doctor> {
        match self.api.get_json::<DoctorList>("/doctor").await {
            Ok(body) => body.doctors,
            Err(err) => {
                error!(error = %err, "failed to fetch doctors");
                Vec::new()
            }
        }
    }

    /// Filter path with blank parameters collapsed to the backend's
    /// "null" sentinel; all-blank is the unconstrained query.
    pub fn filter_path(name: &str, time: &str, specialty: &str) -> String {
        format!(
            "/doctor/filter/{}/{}/{}",
            sentinel(name),
            sentinel(time),
            sentinel(specialty)
        )
    }

    pub async fn filter(&self, name: &str, time: &str, specialty: &str) -> Vec<Doctor> {
        let path = Self::filter_path(name, time, specialty);
        match self.api.get_json::<DoctorList>(&path).await {
            Ok(body) => body.doctors,
            Err(err) => {
                error!(error = %err, "failed to filter doctors");
                Vec::new()
            }
        }
    }

    pub async fn save(&self, form: &DoctorForm, token: &str) -> ApiOutcome {
        let result = self.api.post_json(&format!("/doctor/save/{token}"), form).await;
        write_outcome(
            result,
            "save doctor",
            "Doctor saved successfully",
            "Failed to save doctor",
        )
        .await
    }

    pub async fn delete(&self, id: i64, token: &str) -> ApiOutcome {
        let result = self.api.delete(&format!("/doctor/delete/{id}/{token}")).await;
        write_outcome(
            result,
            "delete doctor",
            "Doctor deletion processed",
            "Failed to delete doctor",
        )
        .await
    }

    /// Doctor login; the caller checks the status and pulls the token
    /// out of the body. `None` means the request never reached the
    /// backend.
    pub async fn login(&self, credentials: &LoginRequest) -> Option<Response> {
        match self.api.post_json("/doctor/login", credentials).await {
            Ok(response) => Some(response),
            Err(err) => {
                error!(error = %err, "doctor login request failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_collapse_to_the_sentinel_path() {
        assert_eq!(
            DoctorService::filter_path("", "", ""),
            "/doctor/filter/null/null/null"
        );
        assert_eq!(
            DoctorService::filter_path("  ", "\t", ""),
            "/doctor/filter/null/null/null"
        );
    }

    #[test]
    fn present_filters_pass_through() {
        assert_eq!(
            DoctorService::filter_path("Dr. A", "09:00", "ENT"),
            "/doctor/filter/Dr. A/09:00/ENT"
        );
        assert_eq!(
            DoctorService::filter_path("", "09:00", ""),
            "/doctor/filter/null/09:00/null"
        );
    }
}
