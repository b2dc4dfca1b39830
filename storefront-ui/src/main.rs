use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use storefront_ui::{navigate_to, use_theme_provider, LandingPage, StorefrontConfig, STOREFRONT_STYLES};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(StorefrontConfig::from_location);
    use_theme_provider();

    rsx! {
        style { {STOREFRONT_STYLES} }
        LandingPage { on_navigate: move |path: String| navigate_to(&path) }
    }
}
