use serde::{Deserialize, Serialize};

/// A patient record as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

/// Payload for the patient signup form. All five fields are required by
/// the form; the backend does the real validation.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_nested_record() {
        let json = r#"{"id": 3, "name": "Pat", "phone": "555", "email": "p@x.com", "address": "1 Way"}"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.id, 3);
        assert_eq!(patient.name, "Pat");
    }
}
