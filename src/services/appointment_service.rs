use serde::Deserialize;
use tracing::error;

use super::client::{ApiClient, ApiOutcome, sentinel, write_outcome};
use crate::domain::{Appointment, NewAppointment};

#[derive(Debug, Deserialize)]
struct AppointmentList {
    #[serde(default)]
    appointments: Vec<Appointment>,
}

#[derive(Clone)]
pub struct AppointmentService {
    api: ApiClient,
}

impl AppointmentService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Doctor-dashboard query: appointments for one date with an optional
    /// patient-name constraint (blank becomes the "null" sentinel).
    pub fn doctor_query(date: &str, patient_name: &str, token: &str) -> String {
        format!(
            "/doctor-appointments?date={date}&name={}&token={token}",
            sentinel(patient_name)
        )
    }

    pub async fn for_doctor(&self, date: &str, patient_name: &str, token: &str) -> Vec<Appointment> {
        let path = Self::doctor_query(date, patient_name, token);
        match self.api.get_json::<AppointmentList>(&path).await {
            Ok(body) => body.appointments,
            Err(err) => {
                error!(error = %err, "failed to fetch doctor appointments");
                Vec::new()
            }
        }
    }

    pub async fn book(&self, booking: &NewAppointment, token: &str) -> ApiOutcome {
        let result = self.api.post_json(&format!("/appointments/{token}"), booking).await;
        write_outcome(
            result,
            "book appointment",
            "Appointment booked successfully",
            "Failed to book appointment",
        )
        .await
    }

    pub async fn cancel(&self, id: i64, token: &str) -> ApiOutcome {
        let result = self.api.delete(&format!("/appointments/{id}/{token}")).await;
        write_outcome(
            result,
            "cancel appointment",
            "Appointment cancelled",
            "Failed to cancel appointment",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doctor_query_normalizes_blank_name() {
        assert_eq!(
            AppointmentService::doctor_query("2026-08-05", "", "tok"),
            "/doctor-appointments?date=2026-08-05&name=null&token=tok"
        );
        assert_eq!(
            AppointmentService::doctor_query("2026-08-05", "Pat", "tok"),
            "/doctor-appointments?date=2026-08-05&name=Pat&token=tok"
        );
    }
}
