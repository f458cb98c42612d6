#![allow(warnings)]
//! Food Dashboard Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod error;
mod models;
mod store;

use app::DashboardView;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Some(level) = config.console_level() {
        wasm_logger::init(wasm_logger::Config::new(level).module_prefix(env!("CARGO_CRATE_NAME")));
    }
    log::info!("using foods API at {}", config.api_base_url);

    let api_base_url = config.api_base_url;
    mount_to_body(move || view! { <DashboardView api_base_url=api_base_url /> });
}
