use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::{Doctor, Role};
use crate::services::Api;
use crate::session::Session;
use crate::ui::components::ConfirmationDialog;
use crate::ui::platform;
use crate::ui::router::Route;
use crate::ui::state::ActiveModal;

/// One doctor as a card. The action control depends on the viewer's
/// role: admins can delete, anonymous patients are told to log in,
/// logged-in patients get the booking flow, anyone else gets no control.
#[component]
pub fn DoctorCard(doctor: Doctor, on_deleted: EventHandler<i64>) -> Element {
    let session = use_context::<Session>();
    let api = use_context::<Arc<Api>>();
    let nav = use_navigator();
    let mut modal = use_context::<Signal<ActiveModal>>();
    let mut confirming = use_signal(|| false);

    let role = session.role();

    let mut delete_doctor = {
        let session = session.clone();
        let api = api.clone();
        let doctor = doctor.clone();
        move || {
            confirming.set(false);
            let Some(token) = session.token() else {
                platform::alert("Session expired. Please login again.");
                nav.push(Route::Home {});
                return;
            };
            let api = api.clone();
            let id = doctor.id;
            spawn(async move {
                let outcome = api.doctors.delete(id, &token).await;
                if outcome.success {
                    platform::alert("Doctor deleted successfully.");
                    on_deleted.call(id);
                } else {
                    platform::alert(&outcome.message);
                }
            });
        }
    };

    let book_as_logged_patient = {
        let session = session.clone();
        let api = api.clone();
        let doctor = doctor.clone();
        move |_| {
            let Some(token) = session.token() else {
                platform::alert("Session expired. Please login again.");
                nav.push(Route::Home {});
                return;
            };
            let api = api.clone();
            let doctor = doctor.clone();
            spawn(async move {
                match api.patients.profile(&token).await {
                    Some(patient) => modal.set(ActiveModal::Booking { doctor, patient }),
                    None => platform::alert("Unable to fetch patient details."),
                }
            });
        }
    };

    rsx! {
        div {
            class: "doctor-card",
            style: "background: white; border-radius: 8px; padding: 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); display: flex; justify-content: space-between; align-items: center; gap: 16px;",

            div {
                class: "doctor-info",
                h3 { style: "margin: 0 0 6px 0;", "{doctor.name}" }
                p { style: "margin: 2px 0; color: #444;", "Specialization: {doctor.specialization}" }
                p { style: "margin: 2px 0; color: #444;", "Email: {doctor.email}" }
                p { style: "margin: 2px 0; color: #444;", "{doctor.availability_label()}" }
            }

            div {
                class: "card-actions",

                {match role {
                    Some(Role::Admin) => rsx! {
                        button {
                            style: "padding: 6px 14px; background: #f44336; color: white; border: none; border-radius: 4px; cursor: pointer;",
                            onclick: move |_| confirming.set(true),
                            "Delete"
                        }
                    },
                    Some(Role::Patient) => rsx! {
                        button {
                            style: "padding: 6px 14px; background: #015c5d; color: white; border: none; border-radius: 4px; cursor: pointer;",
                            onclick: move |_| platform::alert("Please log in to book an appointment."),
                            "Book Now"
                        }
                    },
                    Some(Role::LoggedPatient) => rsx! {
                        button {
                            style: "padding: 6px 14px; background: #015c5d; color: white; border: none; border-radius: 4px; cursor: pointer;",
                            onclick: book_as_logged_patient,
                            "Book Now"
                        }
                    },
                    Some(Role::Doctor) | None => rsx! {},
                }}
            }
        }

        if *confirming.read() {
            ConfirmationDialog {
                title: "Delete doctor".to_string(),
                message: "Are you sure you want to delete this doctor?".to_string(),
                on_confirm: move |_| delete_doctor(),
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}
