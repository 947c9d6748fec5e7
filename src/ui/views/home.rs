use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::Role;
use crate::session::Session;
use crate::ui::components::{AdminLoginModal, DoctorLoginModal, Header};
use crate::ui::router::Route;
use crate::ui::state::ActiveModal;

/// Entry page: pick how to use the system. Rendering the landing header
/// resets any stored session, so every visit starts clean.
#[component]
pub fn Home() -> Element {
    let session = use_context::<Session>();
    let nav = use_navigator();
    let mut modal = use_context::<Signal<ActiveModal>>();

    let choose_patient = move |_| {
        session.select_role(Role::Patient);
        nav.push(Route::PatientDashboard {});
    };

    rsx! {
        Header { landing: true }

        main {
            style: "min-height: calc(100vh - 60px); display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 24px; background: #f5f5f5;",

            h1 { style: "margin: 0; color: #015c5d;", "Welcome to Hospital CMS" }
            p { style: "margin: 0; color: #666;", "Select how you want to continue" }

            div {
                style: "display: flex; gap: 16px;",

                button {
                    style: "padding: 12px 28px; background: #015c5d; color: white; border: none; border-radius: 6px; font-size: 16px; cursor: pointer;",
                    onclick: move |_| modal.set(ActiveModal::AdminLogin),
                    "Admin Login"
                }
                button {
                    style: "padding: 12px 28px; background: #015c5d; color: white; border: none; border-radius: 6px; font-size: 16px; cursor: pointer;",
                    onclick: move |_| modal.set(ActiveModal::DoctorLogin),
                    "Doctor Login"
                }
                button {
                    style: "padding: 12px 28px; background: white; color: #015c5d; border: 2px solid #015c5d; border-radius: 6px; font-size: 16px; cursor: pointer;",
                    onclick: choose_patient,
                    "Patient Portal"
                }
            }
        }

        {match &*modal.read() {
            ActiveModal::AdminLogin => rsx! {
                AdminLoginModal { on_close: move |_| modal.set(ActiveModal::None) }
            },
            ActiveModal::DoctorLogin => rsx! {
                DoctorLoginModal { on_close: move |_| modal.set(ActiveModal::None) }
            },
            _ => rsx! {},
        }}
    }
}
