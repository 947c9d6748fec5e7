/// Client-held role label deciding which controls render and which
/// endpoints may be called. The backend is the trust boundary; this is
/// presentation state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Doctor,
    /// Anonymous visitor browsing the patient pages.
    Patient,
    /// Patient with a stored auth token.
    LoggedPatient,
}

impl Role {
    /// Parse the label stored in client storage. Unknown labels yield
    /// `None`, which renders as "no controls" everywhere.
    pub fn from_label(label: &str) -> Option<Role> {
        match label {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            "patient" => Some(Role::Patient),
            "loggedPatient" => Some(Role::LoggedPatient),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
            Role::LoggedPatient => "loggedPatient",
        }
    }

    /// Whether a stored token must accompany this role. Only the
    /// anonymous patient view is browsable without one.
    pub fn requires_token(&self) -> bool {
        !matches!(self, Role::Patient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("admin", Role::Admin)]
    #[case("doctor", Role::Doctor)]
    #[case("patient", Role::Patient)]
    #[case("loggedPatient", Role::LoggedPatient)]
    fn parses_known_labels(#[case] label: &str, #[case] expected: Role) {
        assert_eq!(Role::from_label(label), Some(expected));
        assert_eq!(expected.label(), label);
    }

    #[rstest]
    #[case("")]
    #[case("ADMIN")]
    #[case("logged_patient")]
    #[case("superuser")]
    fn rejects_unknown_labels(#[case] label: &str) {
        assert_eq!(Role::from_label(label), None);
    }

    #[test]
    fn only_anonymous_patient_skips_the_token() {
        assert!(Role::Admin.requires_token());
        assert!(Role::Doctor.requires_token());
        assert!(Role::LoggedPatient.requires_token());
        assert!(!Role::Patient.requires_token());
    }
}
