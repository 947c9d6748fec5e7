#[cfg(target_arch = "wasm32")]
fn main() {
    use carebook::ui::App;

    wasm_logger::init(wasm_logger::Config::default());
    dioxus_web::launch::launch(App, vec![], dioxus_web::Config::default());
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("carebook targets the browser; build with --target wasm32-unknown-unknown");
    Ok(())
}
