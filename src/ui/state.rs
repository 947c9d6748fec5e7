use crate::domain::{Appointment, Doctor, Patient};

/// Which overlay is open, shared through context so the header and the
/// cards can open modals that the active view hosts. Payload variants
/// carry the records the overlay needs.
#[derive(Clone, PartialEq, Default)]
pub enum ActiveModal {
    #[default]
    None,
    AdminLogin,
    DoctorLogin,
    PatientLogin,
    PatientSignup,
    AddDoctor,
    Booking {
        doctor: Doctor,
        patient: Patient,
    },
    Prescription {
        appointment: Appointment,
    },
}
