#[cfg(test)]
mod tests {
    use std::panic::catch_unwind;

    use chrono::NaiveDate;
    use dioxus::prelude::*;

    use crate::domain::{Appointment, Patient};
    use crate::ui::App;
    use crate::ui::components::{AppointmentRow, ConfirmationDialog};
    use crate::ui::state::ActiveModal;

    #[test]
    fn app_builds_the_landing_route() {
        let result = catch_unwind(|| {
            let mut vdom = VirtualDom::new(App);
            let _ = vdom.rebuild_to_vec();
        });
        assert!(result.is_ok(), "App should render the entry page without panicking");
    }

    #[test]
    fn appointment_row_renders_with_modal_context() {
        let result = catch_unwind(|| {
            let mut vdom = VirtualDom::new(test_appointment_row);
            let _ = vdom.rebuild_to_vec();
        });
        assert!(result.is_ok(), "AppointmentRow should render when the modal context is provided");
    }

    #[test]
    fn confirmation_dialog_renders_standalone() {
        let result = catch_unwind(|| {
            let mut vdom = VirtualDom::new(test_confirmation_dialog);
            let _ = vdom.rebuild_to_vec();
        });
        assert!(result.is_ok());
    }

    #[component]
    fn test_appointment_row() -> Element {
        use_context_provider(|| Signal::new(ActiveModal::None));

        let appointment = Appointment {
            id: 12,
            appointment_time: NaiveDate::from_ymd_opt(2026, 8, 5)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            status: "SCHEDULED".to_string(),
            patient: Some(Patient {
                id: 3,
                name: "Pat".to_string(),
                phone: "555".to_string(),
                email: "p@x.com".to_string(),
                address: String::new(),
            }),
            doctor: None,
        };

        rsx! {
            table {
                tbody {
                    AppointmentRow { appointment }
                }
            }
        }
    }

    #[component]
    fn test_confirmation_dialog() -> Element {
        rsx! {
            ConfirmationDialog {
                title: "Delete doctor".to_string(),
                message: "Are you sure?".to_string(),
                on_confirm: move |_| {},
                on_cancel: move |_| {},
            }
        }
    }
}
