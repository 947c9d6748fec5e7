mod admin_service;
mod appointment_service;
mod client;
mod doctor_service;
mod patient_service;
mod prescription_service;

pub use admin_service::AdminService;
pub use appointment_service::AppointmentService;
pub use client::{ApiClient, ApiError, ApiOutcome, TokenBody};
pub use doctor_service::DoctorService;
pub use patient_service::PatientService;
pub use prescription_service::PrescriptionService;

use crate::config::ApiConfig;

/// One handle per backend resource, shared through the component context
/// the same way views share a repository.
pub struct Api {
    pub admin: AdminService,
    pub doctors: DoctorService,
    pub patients: PatientService,
    pub appointments: AppointmentService,
    pub prescriptions: PrescriptionService,
}

impl Api {
    pub fn new(config: &ApiConfig) -> Self {
        let client = ApiClient::new(config);
        Self {
            admin: AdminService::new(client.clone()),
            doctors: DoctorService::new(client.clone()),
            patients: PatientService::new(client.clone()),
            appointments: AppointmentService::new(client.clone()),
            prescriptions: PrescriptionService::new(client),
        }
    }
}
