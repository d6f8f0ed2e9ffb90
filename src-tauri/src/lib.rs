// Learn more about Tauri commands at https://tauri.app/develop/calling-rust/

pub mod app;
pub mod config;
pub mod countries;
pub mod error;
pub mod http;
pub mod input;
pub mod logging;
pub mod meals;
pub mod render;

#[cfg(feature = "desktop")]
mod commands;

#[cfg(test)]
pub(crate) mod testing;

pub use app::Widgets;
pub use config::AppConfig;
pub use error::{FetchError, WidgetError};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use crate::commands::*;
    use tauri::Manager;

    logging::init();
    let config = match AppConfig::load(None) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration, falling back to defaults");
            AppConfig::default()
        }
    };

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(move |app| {
            let widgets = build_state(app.handle(), &config)?;
            app.manage(widgets);
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            countries_input,
            countries_details,
            countries_close,
            meals_input,
            meals_toggle,
            meals_featured
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
