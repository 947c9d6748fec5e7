pub mod add_doctor_modal;
pub mod admin_login_modal;
pub mod appointment_row;
pub mod booking_modal;
pub mod confirmation_dialog;
pub mod doctor_card;
pub mod doctor_login_modal;
pub mod header;
pub mod patient_appointment_row;
pub mod patient_login_modal;
pub mod prescription_modal;
pub mod signup_modal;

pub use add_doctor_modal::AddDoctorModal;
pub use admin_login_modal::AdminLoginModal;
pub use appointment_row::AppointmentRow;
pub use booking_modal::BookingModal;
pub use confirmation_dialog::ConfirmationDialog;
pub use doctor_card::DoctorCard;
pub use doctor_login_modal::DoctorLoginModal;
pub use header::Header;
pub use patient_appointment_row::PatientAppointmentRow;
pub use patient_login_modal::PatientLoginModal;
pub use prescription_modal::PrescriptionModal;
pub use signup_modal::SignupModal;
