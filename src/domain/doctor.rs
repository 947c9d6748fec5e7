use serde::{Deserialize, Serialize};

/// A doctor record as returned by the backend. Snapshots only; nothing
/// is cached or merged client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub available_times: Vec<String>,
}

impl Doctor {
    /// Card line listing the doctor's open slots, e.g.
    /// "Available: 09:00, 10:00".
    pub fn availability_label(&self) -> String {
        format!("Available: {}", self.available_times.join(", "))
    }
}

/// Payload for the admin add-doctor form.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DoctorForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub specialty: String,
    pub availability: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_label_joins_times() {
        let doctor = Doctor {
            id: 1,
            name: "Dr. A".to_string(),
            specialization: "ENT".to_string(),
            email: "a@x.com".to_string(),
            available_times: vec!["09:00".to_string(), "10:00".to_string()],
        };
        assert_eq!(doctor.availability_label(), "Available: 09:00, 10:00");
    }

    #[test]
    fn availability_label_with_no_slots() {
        let doctor = Doctor {
            id: 2,
            name: "Dr. B".to_string(),
            specialization: String::new(),
            email: String::new(),
            available_times: Vec::new(),
        };
        assert_eq!(doctor.availability_label(), "Available: ");
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "id": 7,
            "name": "Dr. A",
            "specialization": "ENT",
            "email": "a@x.com",
            "availableTimes": ["09:00", "10:00"]
        }"#;
        let doctor: Doctor = serde_json::from_str(json).unwrap();
        assert_eq!(doctor.id, 7);
        assert_eq!(doctor.available_times, vec!["09:00", "10:00"]);
    }

    #[test]
    fn tolerates_missing_optional_fields() {
        let doctor: Doctor = serde_json::from_str(r#"{"name": "Dr. C"}"#).unwrap();
        assert_eq!(doctor.id, 0);
        assert!(doctor.available_times.is_empty());
    }
}
