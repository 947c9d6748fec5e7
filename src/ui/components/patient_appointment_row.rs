use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::Appointment;
use crate::services::Api;
use crate::session::Session;
use crate::ui::components::ConfirmationDialog;
use crate::ui::platform;
use crate::ui::router::Route;

/// One of the logged-in patient's own appointments, with a cancel
/// action. On success the host view drops exactly this row.
#[component]
pub fn PatientAppointmentRow(appointment: Appointment, on_cancelled: EventHandler<i64>) -> Element {
    let api = use_context::<Arc<Api>>();
    let session = use_context::<Session>();
    let nav = use_navigator();
    let mut confirming = use_signal(|| false);

    let appointment_id = appointment.id;
    let mut cancel_appointment = move || {
        confirming.set(false);
        let Some(token) = session.token() else {
            platform::alert("Session expired. Please login again.");
            nav.push(Route::Home {});
            return;
        };
        let api = api.clone();
        let id = appointment_id;
        spawn(async move {
            let outcome = api.appointments.cancel(id, &token).await;
            platform::alert(&outcome.message);
            if outcome.success {
                on_cancelled.call(id);
            }
        });
    };

    rsx! {
        div {
            style: "background: white; border-radius: 8px; padding: 14px 16px; box-shadow: 0 2px 8px rgba(0,0,0,0.1); display: flex; justify-content: space-between; align-items: center; gap: 16px;",

            div {
                h4 { style: "margin: 0 0 4px 0;", "Dr. {appointment.doctor_name()}" }
                p { style: "margin: 2px 0; color: #444; font-size: 14px;", "{appointment.time_label()}" }
                span {
                    style: "font-size: 12px; padding: 2px 8px; background: #eef2ff; color: #3b4bd8; border-radius: 10px;",
                    "{appointment.status}"
                }
            }

            button {
                style: "padding: 6px 14px; background: #f44336; color: white; border: none; border-radius: 4px; cursor: pointer;",
                onclick: move |_| confirming.set(true),
                "Cancel"
            }
        }

        if *confirming.read() {
            ConfirmationDialog {
                title: "Cancel appointment".to_string(),
                message: "Are you sure you want to cancel this appointment?".to_string(),
                on_confirm: move |_| cancel_appointment(),
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}
