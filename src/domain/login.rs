use serde::Serialize;

/// Credentials for patient and doctor logins (both key on email).
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin logins key on username instead of email.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}
