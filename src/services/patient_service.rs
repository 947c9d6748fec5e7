use reqwest::Response;
use serde::Deserialize;
use tracing::error;

use super::client::{ApiClient, ApiOutcome, sentinel, write_outcome};
use crate::domain::{Appointment, LoginRequest, Patient, SignupRequest};

#[derive(Debug, Deserialize)]
struct PatientEnvelope {
    #[serde(default)]
    patient: Option<Patient>,
}

#[derive(Debug, Deserialize)]
struct AppointmentList {
    #[serde(default)]
    appointments: Vec<Appointment>,
}

#[derive(Clone)]
pub struct PatientService {
    api: ApiClient,
}

impl PatientService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn signup(&self, form: &SignupRequest) -> ApiOutcome {
        let result = self.api.post_json("/patient", form).await;
        write_outcome(result, "patient signup", "Signup successful", "Something went wrong").await
    }

    /// Patient login; the raw response is handed back so the caller can
    /// check the status and extract the token.
    pub async fn login(&self, credentials: &LoginRequest) -> Option<Response> {
        match self.api.post_json("/patient/login", credentials).await {
            Ok(response) => Some(response),
            Err(err) => {
                error!(error = %err, "patient login request failed");
                None
            }
        }
    }

    /// Fetch the logged-in patient's own record via the token.
    pub async fn profile(&self, token: &str) -> Option<Patient> {
        match self.api.get_json::<PatientEnvelope>(&format!("/patient/{token}")).await {
            Ok(body) => body.patient,
            Err(err) => {
                error!(error = %err, "failed to fetch patient profile");
                None
            }
        }
    }

    pub async fn appointments(&self, id: i64, user: &str, token: &str) -> Vec<Appointment> {
        let path = format!("/patient/{id}/{user}/{token}");
        match self.api.get_json::<AppointmentList>(&path).await {
            Ok(body) => body.appointments,
            Err(err) => {
                error!(error = %err, "failed to fetch appointments");
                Vec::new()
            }
        }
    }

    /// Condition is "past"/"future" or blank for all; blank values take
    /// the same "null" sentinel as the doctor filters.
    pub fn filter_path(condition: &str, name: &str, token: &str) -> String {
        format!(
            "/patient/filter/{}/{}/{token}",
            sentinel(condition),
            sentinel(name)
        )
    }

    pub async fn filter_appointments(
        &self,
        condition: &str,
        name: &str,
        token: &str,
    ) -> Vec<Appointment> {
        let path = Self::filter_path(condition, name, token);
        match self.api.get_json::<AppointmentList>(&path).await {
            Ok(body) => body.appointments,
            Err(err) => {
                error!(error = %err, "failed to filter appointments");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_appointment_filters_use_the_sentinel() {
        assert_eq!(
            PatientService::filter_path("", "", "tok"),
            "/patient/filter/null/null/tok"
        );
        assert_eq!(
            PatientService::filter_path("past", "", "tok"),
            "/patient/filter/past/null/tok"
        );
        assert_eq!(
            PatientService::filter_path(" ", "Dr. A", "tok"),
            "/patient/filter/null/Dr. A/tok"
        );
    }
}
