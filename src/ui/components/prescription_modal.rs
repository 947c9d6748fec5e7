use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::{Appointment, Prescription};
use crate::services::Api;
use crate::session::Session;
use crate::ui::platform;

/// Prescription form opened from a doctor-dashboard row. The patient
/// name is pre-filled from the appointment's nested record.
#[component]
pub fn PrescriptionModal(appointment: Appointment, on_close: EventHandler<()>) -> Element {
    let api = use_context::<Arc<Api>>();
    let session = use_context::<Session>();

    let patient_name = appointment
        .patient
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_default();

    let mut medication = use_signal(String::new);
    let mut dosage = use_signal(String::new);
    let mut notes = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_save = {
        let patient_name = patient_name.clone();
        move |_| {
            let prescription = Prescription {
                id: None,
                patient_name: patient_name.clone(),
                appointment_id: appointment.id,
                medication: medication.read().trim().to_string(),
                dosage: dosage.read().trim().to_string(),
                doctor_notes: notes.read().trim().to_string(),
            };

            if prescription.medication.is_empty() || prescription.dosage.is_empty() {
                error.set(Some("Medication and dosage are required".to_string()));
                return;
            }

            let Some(token) = session.token() else {
                platform::alert("Session expired. Please login again.");
                return;
            };

            let api = api.clone();
            spawn(async move {
                submitting.set(true);
                error.set(None);

                let outcome = api.prescriptions.save(&prescription, &token).await;
                platform::alert(&outcome.message);
                if outcome.success {
                    on_close.call(());
                }

                submitting.set(false);
            });
        }
    };

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 999;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_close.call(()),

            div {
                style: "background: white; border-radius: 12px; padding: 24px;
                       width: 90%; max-width: 480px; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                    h2 { style: "margin: 0; font-size: 22px; font-weight: 600;", "Add Prescription" }
                    button {
                        style: "background: none; border: none; font-size: 24px; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                if let Some(err) = error.read().as_ref() {
                    div {
                        style: "background: #fee; color: #c00; padding: 10px; border-radius: 4px; margin-bottom: 15px;",
                        "{err}"
                    }
                }

                div {
                    style: "margin-bottom: 14px;",
                    label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Patient" }
                    input {
                        r#type: "text",
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; background: #f5f5f5;",
                        value: "{patient_name}",
                        readonly: true,
                    }
                }

                div {
                    style: "margin-bottom: 14px;",
                    label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Medication" }
                    input {
                        r#type: "text",
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                        value: "{medication}",
                        oninput: move |e| medication.set(e.value()),
                    }
                }

                div {
                    style: "margin-bottom: 14px;",
                    label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Dosage" }
                    input {
                        r#type: "text",
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                        value: "{dosage}",
                        oninput: move |e| dosage.set(e.value()),
                    }
                }

                div {
                    style: "margin-bottom: 24px;",
                    label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Notes" }
                    textarea {
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; min-height: 80px; resize: vertical; font-family: inherit;",
                        value: "{notes}",
                        oninput: move |e| notes.set(e.value()),
                    }
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 10px;",
                    button {
                        style: "padding: 8px 20px; border: 1px solid #ddd; background: white; color: #333; border-radius: 4px; cursor: pointer; font-size: 14px;",
                        onclick: move |_| on_close.call(()),
                        disabled: *submitting.read(),
                        "Cancel"
                    }
                    button {
                        style: "padding: 8px 20px; border: none; background: #015c5d; color: white; border-radius: 4px; cursor: pointer; font-size: 14px;",
                        onclick: handle_save,
                        disabled: *submitting.read(),
                        if *submitting.read() { "Saving..." } else { "Save Prescription" }
                    }
                }
            }
        }
    }
}
