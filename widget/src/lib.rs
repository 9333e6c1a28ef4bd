//! # saanvi-widget
//!
//! Leptos + WASM front end for the Saanvi chat widget. Renders the launcher,
//! chat window, message list, and feedback controls on top of the
//! framework-agnostic `saanvi` controller.
//!
//! Browser glue (storage, audio, timers) is gated behind the `csr` feature so
//! the crate still builds and tests natively.

pub mod app;
pub mod components;
pub mod util;


use saanvi::WidgetConfig;

#[cfg(feature = "csr")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Parse a `WidgetConfig` JSON object. Invalid config is logged and replaced
/// by the defaults so the widget always mounts.
pub fn resolve_config(raw: &str) -> WidgetConfig {
    WidgetConfig::from_json(raw).unwrap_or_else(|e| {
        log::warn!("{e}; using default widget config");
        WidgetConfig::default()
    })
}

/// Mount the widget at the end of `<body>` with the default config.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount() {
    init_logging();
    start(WidgetConfig::default());
}

/// Mount the widget with a JSON config object.
#[cfg(feature = "csr")]
#[wasm_bindgen]
pub fn mount_with_config(config_json: String) {
    init_logging();
    start(resolve_config(&config_json));
}

#[cfg(feature = "csr")]
fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}

#[cfg(feature = "csr")]
fn start(config: WidgetConfig) {
    use leptos::prelude::*;

    use crate::app::ChatWidget;

    leptos::mount::mount_to_body(move || view! { <ChatWidget config=config/> });
}
