use dioxus::prelude::*;

use crate::domain::Appointment;
use crate::ui::state::ActiveModal;

/// One appointment as a doctor-dashboard table row, patient data nested.
#[component]
pub fn AppointmentRow(appointment: Appointment) -> Element {
    let mut modal = use_context::<Signal<ActiveModal>>();

    let (patient_id, patient_name, patient_phone, patient_email) = match &appointment.patient {
        Some(patient) => (
            patient.id.to_string(),
            patient.name.clone(),
            patient.phone.clone(),
            patient.email.clone(),
        ),
        None => ("-".to_string(), "-".to_string(), "-".to_string(), "-".to_string()),
    };

    let open_prescription = {
        let appointment = appointment.clone();
        move |_| {
            modal.set(ActiveModal::Prescription {
                appointment: appointment.clone(),
            });
        }
    };

    rsx! {
        tr {
            style: "border-bottom: 1px solid #eee;",
            td { style: "padding: 10px;", "{patient_id}" }
            td { style: "padding: 10px;", "{patient_name}" }
            td { style: "padding: 10px;", "{patient_phone}" }
            td { style: "padding: 10px;", "{patient_email}" }
            td { style: "padding: 10px;", "{appointment.time_label()}" }
            td {
                style: "padding: 10px; text-align: center;",
                button {
                    style: "padding: 4px 12px; background: #015c5d; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: open_prescription,
                    "Prescribe"
                }
            }
        }
    }
}
