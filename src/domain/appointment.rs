use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::doctor::Doctor;
use super::patient::Patient;

/// An appointment record. The doctor dashboard receives rows with nested
/// patient data; the patient views receive rows with nested doctor data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    #[serde(default)]
    pub id: i64,
    pub appointment_time: NaiveDateTime,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub doctor: Option<Doctor>,
}

impl Appointment {
    pub fn time_label(&self) -> String {
        self.appointment_time.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn doctor_name(&self) -> &str {
        self.doctor.as_ref().map(|d| d.name.as_str()).unwrap_or("-")
    }
}

/// Booking payload sent by the logged-in patient. The backend expects the
/// doctor and patient records nested, with an ISO local date-time.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub doctor: Doctor,
    pub patient: Patient,
    pub appointment_time: String,
}

impl NewAppointment {
    /// Compose the backend's date-time string from the picked date and an
    /// availability slot. Slots may be plain starts ("09:00") or ranges
    /// ("09:00-10:00"); the start is what gets booked.
    pub fn compose_time(date: &str, slot: &str) -> String {
        let start = slot.split('-').next().unwrap_or(slot).trim();
        format!("{date}T{start}:00")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_row_with_nested_patient() {
        let json = r#"{
            "id": 12,
            "appointmentTime": "2026-08-05T09:00:00",
            "status": "SCHEDULED",
            "patient": {"id": 3, "name": "Pat", "phone": "555", "email": "p@x.com"}
        }"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.id, 12);
        assert_eq!(appointment.time_label(), "2026-08-05 09:00");
        assert_eq!(appointment.patient.unwrap().name, "Pat");
        assert!(appointment.doctor.is_none());
    }

    #[test]
    fn doctor_name_falls_back_when_absent() {
        let json = r#"{"id": 1, "appointmentTime": "2026-08-05T09:00:00"}"#;
        let appointment: Appointment = serde_json::from_str(json).unwrap();
        assert_eq!(appointment.doctor_name(), "-");
    }

    #[test]
    fn compose_time_uses_slot_start() {
        assert_eq!(
            NewAppointment::compose_time("2026-08-05", "09:00-10:00"),
            "2026-08-05T09:00:00"
        );
        assert_eq!(
            NewAppointment::compose_time("2026-08-05", "14:30"),
            "2026-08-05T14:30:00"
        );
    }
}
