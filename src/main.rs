//! Todo List Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod presentation;
mod store;
mod reducer;
mod context;
mod components;
mod app;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    logging::init(log::LevelFilter::Info);

    let config = WidgetConfig::load();
    log::set_max_level(config.level_filter());
    log::info!("[APP] mounting, theme={}", config.initial_theme.as_str());

    mount_to_body(move || view! { <App config=config /> });
}
