//! Harvest Market Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod fetch;
mod listing;
mod markdown;
mod models;
mod pages;
mod store;
mod validation;

use std::sync::Arc;

use api::{ApiClient, SessionCredentials};
use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_env();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    log::info!("starting against {}", config.api_base_url);

    let credentials = SessionCredentials::from_local_storage(&config.token_storage_key);
    let api = ApiClient::new(config.clone(), Arc::new(credentials));

    mount_to_body(move || view! { <App api=api config=config /> });
}
