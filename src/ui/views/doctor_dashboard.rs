use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;

use crate::domain::Appointment;
use crate::services::Api;
use crate::session::Session;
use crate::ui::components::{AppointmentRow, Header, PrescriptionModal};
use crate::ui::state::ActiveModal;

/// Doctor view: the day's appointments with nested patient data,
/// filterable by date and patient name. Rows open the prescription form.
#[component]
pub fn DoctorDashboard() -> Element {
    let api = use_context::<Arc<Api>>();
    let session = use_context::<Session>();
    let mut modal = use_context::<Signal<ActiveModal>>();

    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut loading = use_signal(|| true);
    let mut date = use_signal(today);
    let mut name_filter = use_signal(String::new);

    use_effect({
        let api = api.clone();
        let session = session.clone();
        move || {
            load_appointments(api.clone(), session.clone(), date, name_filter, appointments, loading);
        }
    });

    // Snapshot before the rsx! macro.
    let is_loading = *loading.read();
    let rows = appointments.read().clone();

    rsx! {
        Header {}

        main {
            style: "padding: 20px; background: #f5f5f5; min-height: 100vh;",

            div {
                style: "margin-bottom: 20px; padding: 15px; background: white; border-radius: 8px; display: flex; gap: 10px; align-items: center;",

                input {
                    r#type: "text",
                    placeholder: "Search by patient name...",
                    value: "{name_filter}",
                    style: "flex: 1; padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                    oninput: {
                        let api = api.clone();
                        let session = session.clone();
                        move |e: FormEvent| {
                            name_filter.set(e.value());
                            load_appointments(api.clone(), session.clone(), date, name_filter, appointments, loading);
                        }
                    },
                }

                button {
                    style: "padding: 8px 16px; background: #015c5d; color: white; border: none; border-radius: 4px; cursor: pointer;",
                    onclick: {
                        let api = api.clone();
                        let session = session.clone();
                        move |_| {
                            date.set(today());
                            load_appointments(api.clone(), session.clone(), date, name_filter, appointments, loading);
                        }
                    },
                    "Today"
                }

                input {
                    r#type: "date",
                    value: "{date}",
                    style: "padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                    onchange: {
                        let api = api.clone();
                        let session = session.clone();
                        move |e: FormEvent| {
                            date.set(e.value());
                            load_appointments(api.clone(), session.clone(), date, name_filter, appointments, loading);
                        }
                    },
                }
            }

            table {
                style: "width: 100%; border-collapse: collapse; background: white; border-radius: 8px; overflow: hidden; box-shadow: 0 2px 8px rgba(0,0,0,0.1);",

                thead {
                    tr {
                        style: "background: #015c5d; color: white; text-align: left;",
                        th { style: "padding: 10px;", "Patient ID" }
                        th { style: "padding: 10px;", "Name" }
                        th { style: "padding: 10px;", "Phone" }
                        th { style: "padding: 10px;", "Email" }
                        th { style: "padding: 10px;", "Time" }
                        th { style: "padding: 10px; text-align: center;", "Prescription" }
                    }
                }

                tbody {
                    if is_loading {
                        tr {
                            td { colspan: "6", style: "padding: 30px; text-align: center; color: #999;", "Loading appointments..." }
                        }
                    }

                    if !is_loading && rows.is_empty() {
                        tr {
                            td { colspan: "6", style: "padding: 30px; text-align: center; color: #999;", "No Appointments found for today." }
                        }
                    }

                    for appointment in rows {
                        AppointmentRow { appointment }
                    }
                }
            }
        }

        {match &*modal.read() {
            ActiveModal::Prescription { appointment } => rsx! {
                PrescriptionModal {
                    appointment: appointment.clone(),
                    on_close: move |_| modal.set(ActiveModal::None),
                }
            },
            _ => rsx! {},
        }}
    }
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Fetch the selected day's appointments. Without a token the header
/// guard is already redirecting, so the fetch is skipped entirely.
fn load_appointments(
    api: Arc<Api>,
    session: Session,
    date: Signal<String>,
    name_filter: Signal<String>,
    mut appointments: Signal<Vec<Appointment>>,
    mut loading: Signal<bool>,
) {
    let Some(token) = session.token() else {
        loading.set(false);
        return;
    };
    // peek keeps the mount effect from re-subscribing to the filter
    // signals; the handlers call this explicitly on every change.
    let date_value = date.peek().clone();
    let name_value = name_filter.peek().trim().to_string();
    spawn(async move {
        loading.set(true);
        appointments.set(api.appointments.for_doctor(&date_value, &name_value, &token).await);
        loading.set(false);
    });
}
