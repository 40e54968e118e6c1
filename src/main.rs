mod api;
mod app;
mod browser;
mod components;
mod config;
mod error;
mod export;
mod form;
mod history;
mod modal;
mod models;
mod money;
mod router;
mod settings;
mod state;
mod toast;
mod validate;

use app::{App, AppProps};
use config::AppConfig;

fn main() {
    console_error_panic_hook::set_once();

    let (config, stored_error) = match config::load_config() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };
    wasm_logger::init(wasm_logger::Config::new(config.level()));
    if let Some(err) = stored_error {
        log::warn!("ignoring malformed stored config: {}", err);
    }
    log::info!("receipt desk starting, api base {:?}", config.api_base);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
