mod api;
mod app;
mod components;
mod config;
mod dues;
mod error;
mod format;
mod forms;
mod hooks;
mod list;
mod logging;
mod models;
mod pages;
mod reports;
mod toast;
mod validation;

use app::{App, AppProps};
use config::AppConfig;

fn main() {
    logging::init();
    let config = AppConfig::from_env();
    tracing::info!(api = %config.api_base_url, "starting admin console");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
