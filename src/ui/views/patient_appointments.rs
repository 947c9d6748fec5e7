use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::Appointment;
use crate::services::Api;
use crate::session::Session;
use crate::ui::components::{Header, PatientAppointmentRow};

/// The logged-in patient's own appointments, filterable by past/future
/// and doctor name.
#[component]
pub fn PatientAppointments() -> Element {
    let api = use_context::<Arc<Api>>();
    let session = use_context::<Session>();

    let mut appointments = use_signal(Vec::<Appointment>::new);
    let mut loading = use_signal(|| true);
    let mut condition = use_signal(String::new);
    let mut doctor_name = use_signal(String::new);

    // Initial load goes through the profile: the unfiltered endpoint
    // needs the patient's id, which only the token can resolve.
    use_effect({
        let api = api.clone();
        let session = session.clone();
        move || {
            let api = api.clone();
            let Some(token) = session.token() else {
                loading.set(false);
                return;
            };
            spawn(async move {
                loading.set(true);
                let list = match api.patients.profile(&token).await {
                    Some(patient) => api.patients.appointments(patient.id, "patient", &token).await,
                    None => Vec::new(),
                };
                appointments.set(list);
                loading.set(false);
            });
        }
    });

    // Snapshot before the rsx! macro.
    let is_loading = *loading.read();
    let appointment_list = appointments.read().clone();

    rsx! {
        Header {}

        main {
            style: "padding: 20px; background: #f5f5f5; min-height: 100vh;",

            h2 { style: "margin: 0 0 16px 0; color: #015c5d;", "My Appointments" }

            div {
                style: "margin-bottom: 20px; padding: 15px; background: white; border-radius: 8px; display: flex; gap: 10px;",

                input {
                    r#type: "text",
                    placeholder: "Search by doctor name...",
                    value: "{doctor_name}",
                    style: "flex: 1; padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                    oninput: {
                        let api = api.clone();
                        let session = session.clone();
                        move |e: FormEvent| {
                            doctor_name.set(e.value());
                            refresh_filtered(api.clone(), session.clone(), condition, doctor_name, appointments, loading);
                        }
                    },
                }

                select {
                    style: "padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                    value: "{condition}",
                    onchange: {
                        let api = api.clone();
                        let session = session.clone();
                        move |e: FormEvent| {
                            condition.set(e.value());
                            refresh_filtered(api.clone(), session.clone(), condition, doctor_name, appointments, loading);
                        }
                    },
                    option { value: "", "All" }
                    option { value: "past", "Past" }
                    option { value: "future", "Future" }
                }
            }

            div {
                style: "display: grid; gap: 12px;",

                if is_loading {
                    p { style: "text-align: center; color: #999; padding: 40px;", "Loading appointments..." }
                }

                if !is_loading && appointment_list.is_empty() {
                    p { style: "text-align: center; color: #999; padding: 40px;", "No appointments found." }
                }

                for appointment in appointment_list {
                    PatientAppointmentRow {
                        appointment,
                        on_cancelled: move |id: i64| {
                            appointments.with_mut(|list| list.retain(|a| a.id != id));
                        },
                    }
                }
            }
        }
    }
}

fn refresh_filtered(
    api: Arc<Api>,
    session: Session,
    condition: Signal<String>,
    doctor_name: Signal<String>,
    mut appointments: Signal<Vec<Appointment>>,
    mut loading: Signal<bool>,
) {
    let Some(token) = session.token() else {
        return;
    };
    let condition_value = condition.read().clone();
    let name_value = doctor_name.read().trim().to_string();
    spawn(async move {
        loading.set(true);
        appointments.set(
            api.patients
                .filter_appointments(&condition_value, &name_value, &token)
                .await,
        );
        loading.set(false);
    });
}
