//! Browser chrome that has no equivalent off-wasm. Native builds (used
//! by the test suite) log instead of popping dialogs.

#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::info!(target: "ui::alert", "{message}");
}
