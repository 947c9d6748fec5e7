pub mod admin_dashboard;
pub mod doctor_dashboard;
pub mod home;
pub mod logged_patient_dashboard;
pub mod patient_appointments;
pub mod patient_dashboard;

pub use admin_dashboard::AdminDashboard;
pub use doctor_dashboard::DoctorDashboard;
pub use home::Home;
pub use logged_patient_dashboard::LoggedPatientDashboard;
pub use patient_appointments::PatientAppointments;
pub use patient_dashboard::PatientDashboard;
