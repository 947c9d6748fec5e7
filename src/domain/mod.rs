pub mod appointment;
pub mod doctor;
pub mod login;
pub mod patient;
pub mod prescription;
pub mod role;

pub use appointment::{Appointment, NewAppointment};
pub use doctor::{Doctor, DoctorForm};
pub use login::{AdminCredentials, LoginRequest};
pub use patient::{Patient, SignupRequest};
pub use prescription::Prescription;
pub use role::Role;
