use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::{LoginRequest, Role};
use crate::services::{Api, TokenBody};
use crate::session::Session;
use crate::ui::platform;
use crate::ui::router::Route;

#[component]
pub fn DoctorLoginModal(on_close: EventHandler<()>) -> Element {
    let api = use_context::<Arc<Api>>();
    let session = use_context::<Session>();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let handle_login = move |_| {
        let api = api.clone();
        let session = session.clone();
        spawn(async move {
            submitting.set(true);

            let credentials = LoginRequest {
                email: email.read().clone(),
                password: password.read().clone(),
            };

            match api.doctors.login(&credentials).await {
                Some(response) if response.status().is_success() => {
                    let token = response
                        .json::<TokenBody>()
                        .await
                        .ok()
                        .and_then(|body| body.token);
                    match token {
                        Some(token) => {
                            session.sign_in(Role::Doctor, &token);
                            on_close.call(());
                            nav.push(Route::DoctorDashboard {});
                        }
                        None => platform::alert("Invalid credentials!"),
                    }
                }
                Some(_) => platform::alert("Invalid credentials!"),
                None => platform::alert("Failed to login."),
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
                       width: 90%; max-width: 420px; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px;",
                    h2 { style: "margin: 0; font-size: 22px; font-weight: 600;", "Doctor Login" }
                    button {
                        style: "background: none; border: none; font-size: 24px; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div {
                    style: "margin-bottom: 16px;",
                    label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Email" }
                    input {
                        r#type: "email",
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }

                div {
                    style: "margin-bottom: 24px;",
                    label { style: "display: block; margin-bottom: 5px; font-weight: 500;", "Password" }
                    input {
                        r#type: "password",
                        style: "width: 100%; padding: 8px 12px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px;",
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
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
                        onclick: handle_login,
                        disabled: *submitting.read(),
                        if *submitting.read() { "Logging in..." } else { "Login" }
                    }
                }
            }
        }
    }
}
