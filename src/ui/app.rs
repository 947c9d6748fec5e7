use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::config::ApiConfig;
use crate::services::Api;
use crate::session::Session;
use crate::ui::router::Route;
use crate::ui::state::ActiveModal;

#[component]
pub fn App() -> Element {
    // Shared handles: backend services, the session accessor, and the
    // currently-open overlay. Everything below reaches these via context.
    use_context_provider(|| Arc::new(Api::new(&ApiConfig::default())));
    use_context_provider(Session::from_platform);
    use_context_provider(|| Signal::new(ActiveModal::None));

    rsx! {
        Router::<Route> {}
    }
}
