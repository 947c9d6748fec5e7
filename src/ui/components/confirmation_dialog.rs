use dioxus::prelude::*;

/// Blocking yes/no overlay for destructive actions.
#[component]
pub fn ConfirmationDialog(
    title: String,
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 1000;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_cancel.call(()),

            div {
                style: "background: white; border-radius: 8px; padding: 24px;
                       width: 90%; max-width: 400px; box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                h3 {
                    style: "margin: 0 0 12px 0; font-size: 18px; font-weight: 600;",
                    "{title}"
                }

                p {
                    style: "margin: 0 0 20px 0; color: #666; line-height: 1.5;",
                    "{message}"
                }

                div {
                    style: "display: flex; justify-content: flex-end; gap: 10px;",

                    button {
                        style: "padding: 8px 20px; border: 1px solid #ddd;
                               background: white; color: #333; border-radius: 4px;
                               cursor: pointer; font-size: 14px;",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }

                    button {
                        style: "padding: 8px 20px; border: none;
                               background: #dc2626; color: white; border-radius: 4px;
                               cursor: pointer; font-size: 14px;",
                        onclick: move |_| on_confirm.call(()),
                        "Confirm"
                    }
                }
            }
        }
    }
}
