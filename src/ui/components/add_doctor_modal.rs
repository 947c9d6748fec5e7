use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::DoctorForm;
use crate::services::Api;
use crate::session::Session;
use crate::ui::platform;

const AVAILABILITY_SLOTS: &[&str] = &[
    "09:00-10:00",
    "10:00-11:00",
    "11:00-12:00",
    "14:00-15:00",
    "15:00-16:00",
];

/// Admin-only form for registering a doctor.
#[component]
pub fn AddDoctorModal(on_close: EventHandler<()>, on_saved: EventHandler<()>) -> Element {
    let api = use_context::<Arc<Api>>();
    let session = use_context::<Session>();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut specialty = use_signal(String::new);
    let mut availability = use_signal(Vec::<String>::new);

    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_save = move |_| {
        let form = DoctorForm {
            name: name.read().trim().to_string(),
            email: email.read().trim().to_string(),
            phone: phone.read().trim().to_string(),
            password: password.read().clone(),
            specialty: specialty.read().trim().to_string(),
            availability: availability.read().clone(),
        };

        if form.name.is_empty() || form.email.is_empty() || form.password.is_empty() {
            error.set(Some("Name, email and password are required".to_string()));
            return;
        }

        let Some(token) = session.token() else {
            platform::alert("You must be logged in as admin.");
            return;
        };

        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            error.set(None);

            let outcome = api.doctors.save(&form, &token).await;
            platform::alert(&outcome.message);
            if outcome.success {
                on_close.call(());
                on_saved.call(());
            }

            submitting.set(false);
        });
    };

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 999;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_close.call(()),

            div {
                style: "background: white; border-radius: 12px; padding: 24px;
                       width: 90%; max-width: 520px; max-height: 90vh; overflow-y: auto;
                       box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px;",
                    h2 { style: "margin: 0; font-size: 22px; font-weight: 600;", "Add Doctor" }
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
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 14px; margin-bottom: 14px;",

                    div {
                        label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Name" }
                        input {
                            r#type: "text",
                            style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }

                    div {
                        label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Specialty" }
                        input {
                            r#type: "text",
                            style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                            value: "{specialty}",
                            oninput: move |e| specialty.set(e.value()),
                        }
                    }

                    div {
                        label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Email" }
                        input {
                            r#type: "email",
                            style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }

                    div {
                        label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Phone" }
                        input {
                            r#type: "tel",
                            style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                }

                div {
                    style: "margin-bottom: 14px;",
                    label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Password" }
                    input {
                        r#type: "password",
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                div {
                    style: "margin-bottom: 24px;",
                    label { style: "display: block; margin-bottom: 8px; font-weight: 500;", "Availability" }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 10px;",
                        for slot in AVAILABILITY_SLOTS.iter().copied() {
                            label {
                                style: "display: flex; align-items: center; gap: 4px; font-size: 14px;",
                                input {
                                    r#type: "checkbox",
                                    name: "availability",
                                    value: "{slot}",
                                    checked: availability.read().iter().any(|s| s.as_str() == slot),
                                    onchange: move |_| {
                                        availability.with_mut(|slots| {
                                            if let Some(pos) = slots.iter().position(|s| s.as_str() == slot) {
                                                slots.remove(pos);
                                            } else {
                                                slots.push(slot.to_string());
                                            }
                                        });
                                    },
                                }
                                "{slot}"
                            }
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
                        onclick: handle_save,
                        disabled: *submitting.read(),
                        if *submitting.read() { "Saving..." } else { "Save Doctor" }
                    }
                }
            }
        }
    }
}
