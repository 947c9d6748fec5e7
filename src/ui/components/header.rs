use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::domain::Role;
use crate::session::Session;
use crate::ui::platform;
use crate::ui::router::Route;
use crate::ui::state::ActiveModal;

/// Top navigation chrome, re-derived from the stored role on every page.
/// The landing page always resets the session; on any other page an
/// authenticated role without a token is cleared and bounced back to the
/// entry route.
#[component]
pub fn Header(#[props(default = false)] landing: bool) -> Element {
    let session = use_context::<Session>();
    let nav = use_navigator();
    let mut modal = use_context::<Signal<ActiveModal>>();

    {
        let session = session.clone();
        use_effect(move || {
            if landing {
                session.clear();
            } else if session.is_invalid() {
                session.clear();
                platform::alert("Session expired or invalid login. Please log in again.");
                nav.push(Route::Home {});
            }
        });
    }

    let role = if landing { None } else { session.role() };
    let logout_session = session.clone();
    let logout_patient_session = session;

    rsx! {
        header {
            class: "header",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; background: #015c5d; color: white;",

            div {
                class: "logo-section",
                style: "display: flex; align-items: center; gap: 10px;",
                span { style: "font-size: 22px;", "🏥" }
                span { style: "font-size: 20px; font-weight: 600;", "Hospital CMS" }
            }

            if !landing {
                nav {
                    style: "display: flex; align-items: center; gap: 12px;",

                    {match role {
                        Some(Role::Admin) => rsx! {
                            button {
                                class: "adminBtn",
                                style: "padding: 6px 14px; border: none; border-radius: 4px; cursor: pointer;",
                                onclick: move |_| modal.set(ActiveModal::AddDoctor),
                                "Add Doctor"
                            }
                            a {
                                href: "#",
                                style: "color: white;",
                                onclick: move |_| {
                                    logout_session.clear();
                                    nav.push(Route::Home {});
                                },
                                "Logout"
                            }
                        },
                        Some(Role::Doctor) => rsx! {
                            button {
                                class: "adminBtn",
                                style: "padding: 6px 14px; border: none; border-radius: 4px; cursor: pointer;",
                                onclick: move |_| { nav.push(Route::DoctorDashboard {}); },
                                "Home"
                            }
                            a {
                                href: "#",
                                style: "color: white;",
                                onclick: move |_| {
                                    logout_session.clear();
                                    nav.push(Route::Home {});
                                },
                                "Logout"
                            }
                        },
                        Some(Role::Patient) => rsx! {
                            button {
                                class: "adminBtn",
                                style: "padding: 6px 14px; border: none; border-radius: 4px; cursor: pointer;",
                                onclick: move |_| modal.set(ActiveModal::PatientLogin),
                                "Login"
                            }
                            button {
                                class: "adminBtn",
                                style: "padding: 6px 14px; border: none; border-radius: 4px; cursor: pointer;",
                                onclick: move |_| modal.set(ActiveModal::PatientSignup),
                                "Sign Up"
                            }
                        },
                        Some(Role::LoggedPatient) => rsx! {
                            button {
                                class: "adminBtn",
                                style: "padding: 6px 14px; border: none; border-radius: 4px; cursor: pointer;",
                                onclick: move |_| { nav.push(Route::LoggedPatientDashboard {}); },
                                "Home"
                            }
                            button {
                                class: "adminBtn",
                                style: "padding: 6px 14px; border: none; border-radius: 4px; cursor: pointer;",
                                onclick: move |_| { nav.push(Route::PatientAppointments {}); },
                                "Appointments"
                            }
                            a {
                                href: "#",
                                style: "color: white;",
                                onclick: move |_| {
                                    logout_patient_session.logout_patient();
                                    nav.push(Route::PatientDashboard {});
                                },
                                "Logout"
                            }
                        },
                        // No readable role: chrome only.
                        None => rsx! {},
                    }}
                }
            }
        }
    }
}
