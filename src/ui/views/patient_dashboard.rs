use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::Doctor;
use crate::services::Api;
use crate::ui::components::{DoctorCard, Header, PatientLoginModal, SignupModal};
use crate::ui::state::ActiveModal;

const SPECIALTIES: &[&str] = &["Cardiologist", "Dentist", "Dermatologist", "ENT", "General"];

/// Public patient view: browse and filter doctors; booking prompts for a
/// login. Hosts the login and signup modals the header opens.
#[component]
pub fn PatientDashboard() -> Element {
    let api = use_context::<Arc<Api>>();
    let mut modal = use_context::<Signal<ActiveModal>>();

    let mut doctors = use_signal(Vec::<Doctor>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut time_filter = use_signal(String::new);
    let mut specialty_filter = use_signal(String::new);

    use_effect({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn(async move {
                loading.set(true);
                doctors.set(api.doctors.list().await);
                loading.set(false);
            });
        }
    });

    let reload = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn(async move {
                doctors.set(api.doctors.list().await);
            });
        }
    };

    // Snapshot before the rsx! macro.
    let is_loading = *loading.read();
    let doctor_list = doctors.read().clone();

    rsx! {
        Header {}

        main {
            style: "padding: 20px; background: #f5f5f5; min-height: 100vh;",

            div {
                style: "margin-bottom: 20px; padding: 15px; background: white; border-radius: 8px; display: flex; gap: 10px;",

                input {
                    r#type: "text",
                    placeholder: "Search doctors by name...",
                    value: "{search}",
                    style: "flex: 1; padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                    oninput: {
                        let api = api.clone();
                        move |e: FormEvent| {
                            search.set(e.value());
                            refresh_filtered(api.clone(), search, time_filter, specialty_filter, doctors, loading);
                        }
                    },
                }

                select {
                    style: "padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                    value: "{time_filter}",
                    onchange: {
                        let api = api.clone();
                        move |e: FormEvent| {
                            time_filter.set(e.value());
                            refresh_filtered(api.clone(), search, time_filter, specialty_filter, doctors, loading);
                        }
                    },
                    option { value: "", "All times" }
                    option { value: "AM", "AM" }
                    option { value: "PM", "PM" }
                }

                select {
                    style: "padding: 8px; border: 1px solid #ddd; border-radius: 4px;",
                    value: "{specialty_filter}",
                    onchange: {
                        let api = api.clone();
                        move |e: FormEvent| {
                            specialty_filter.set(e.value());
                            refresh_filtered(api.clone(), search, time_filter, specialty_filter, doctors, loading);
                        }
                    },
                    option { value: "", "All specialties" }
                    for specialty in SPECIALTIES {
                        option { value: "{specialty}", "{specialty}" }
                    }
                }
            }

            div {
                style: "display: grid; gap: 14px;",

                if is_loading {
                    p { style: "text-align: center; color: #999; padding: 40px;", "Loading doctors..." }
                }

                if !is_loading && doctor_list.is_empty() {
                    p { style: "text-align: center; color: #999; padding: 40px;", "No doctors found with the given filters." }
                }

                for doctor in doctor_list {
                    // Anonymous browsing has no delete control.
                    DoctorCard { doctor, on_deleted: move |_| {} }
                }
            }
        }

        {match &*modal.read() {
            ActiveModal::PatientLogin => rsx! {
                PatientLoginModal { on_close: move |_| modal.set(ActiveModal::None) }
            },
            ActiveModal::PatientSignup => rsx! {
                SignupModal {
                    on_close: move |_| modal.set(ActiveModal::None),
                    on_signed_up: move |_| reload(),
                }
            },
            _ => rsx! {},
        }}
    }
}

fn refresh_filtered(
    api: Arc<Api>,
    search: Signal<String>,
    time: Signal<String>,
    specialty: Signal<String>,
    mut doctors: Signal<Vec<Doctor>>,
    mut loading: Signal<bool>,
) {
    let name = search.read().trim().to_string();
    let time_value = time.read().clone();
    let specialty_value = specialty.read().clone();
    spawn(async move {
        loading.set(true);
        doctors.set(api.doctors.filter(&name, &time_value, &specialty_value).await);
        loading.set(false);
    });
}
