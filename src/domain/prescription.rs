use serde::{Deserialize, Serialize};

/// Prescription written by a doctor against a completed appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Prescription {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub patient_name: String,
    pub appointment_id: i64,
    pub medication: String,
    pub dosage: String,
    #[serde(default)]
    pub doctor_notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_without_id_for_new_prescriptions() {
        let prescription = Prescription {
            id: None,
            patient_name: "Pat".to_string(),
            appointment_id: 12,
            medication: "Ibuprofen".to_string(),
            dosage: "200mg".to_string(),
            doctor_notes: String::new(),
        };
        let json = serde_json::to_value(&prescription).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["appointmentId"], 12);
        assert_eq!(json["patientName"], "Pat");
    }
}
