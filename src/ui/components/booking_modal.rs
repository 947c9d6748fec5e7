use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::{Doctor, NewAppointment, Patient};
use crate::services::Api;
use crate::session::Session;
use crate::ui::platform;
use crate::ui::router::Route;

/// Booking overlay for the logged-in patient, opened with the doctor and
/// the patient's own record already resolved.
#[component]
pub fn BookingModal(doctor: Doctor, patient: Patient, on_close: EventHandler<()>) -> Element {
    let api = use_context::<Arc<Api>>();
    let session = use_context::<Session>();
    let nav = use_navigator();

    let mut date = use_signal(|| Local::now().format("%Y-%m-%d").to_string());
    let mut slot = use_signal({
        let first = doctor.available_times.first().cloned().unwrap_or_default();
        move || first
    });
    let mut submitting = use_signal(|| false);

    let handle_book = {
        let doctor = doctor.clone();
        let patient = patient.clone();
        move |_| {
            let Some(token) = session.token() else {
                platform::alert("Session expired. Please login again.");
                nav.push(Route::Home {});
                return;
            };
            if slot.read().is_empty() {
                platform::alert("Select an available time slot.");
                return;
            }

            let booking = NewAppointment {
                doctor: doctor.clone(),
                patient: patient.clone(),
                appointment_time: NewAppointment::compose_time(&date.read(), &slot.read()),
            };

            let api = api.clone();
            spawn(async move {
                submitting.set(true);
                let outcome = api.appointments.book(&booking, &token).await;
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
                       width: 90%; max-width: 440px; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                    h2 { style: "margin: 0; font-size: 22px; font-weight: 600;", "Book Appointment" }
                    button {
                        style: "background: none; border: none; font-size: 24px; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div {
                    style: "margin-bottom: 16px; padding: 12px; background: #f5f5f5; border-radius: 8px; font-size: 14px;",
                    p { style: "margin: 2px 0;", "Doctor: {doctor.name} ({doctor.specialization})" }
                    p { style: "margin: 2px 0;", "Patient: {patient.name}" }
                }

                div {
                    style: "margin-bottom: 16px;",
                    label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Date" }
                    input {
                        r#type: "date",
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                        value: "{date}",
                        oninput: move |e| date.set(e.value()),
                    }
                }

                div {
                    style: "margin-bottom: 24px;",
                    label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Time Slot" }
                    select {
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                        value: "{slot}",
                        onchange: move |e| slot.set(e.value()),
                        for time in doctor.available_times.iter() {
                            option { value: "{time}", "{time}" }
                        }
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
                        onclick: handle_book,
                        disabled: *submitting.read(),
                        if *submitting.read() { "Booking..." } else { "Book Now" }
                    }
                }
            }
        }
    }
}
