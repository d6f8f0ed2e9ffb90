use crate::app::Widgets;
use crate::config::AppConfig;
use crate::countries::{CountryDetail, ModalTarget};
use crate::http::ReqwestSource;
use crate::input::InputEvent;
use crate::meals::PanelState;
use crate::render::{Patch, Surface};
use std::sync::Arc;
use tauri::{command, AppHandle, Emitter};
use tracing::warn;

pub const COUNTRIES_EVENT: &str = "countries://patch";
pub const MEALS_EVENT: &str = "meals://patch";

/// Emits every patch to the webview on a fixed event name.
pub struct EventSurface {
    app: AppHandle,
    event: &'static str,
}

impl Surface for EventSurface {
    fn apply(&self, patch: Patch) {
        if let Err(e) = self.app.emit(self.event, &patch) {
            warn!(event = self.event, error = %e, "failed to emit patch");
        }
    }
}

pub fn build_state(app: &AppHandle, config: &AppConfig) -> anyhow::Result<Widgets> {
    let http = Arc::new(ReqwestSource::new(&config.http)?);
    let countries = Arc::new(EventSurface { app: app.clone(), event: COUNTRIES_EVENT });
    let meals = Arc::new(EventSurface { app: app.clone(), event: MEALS_EVENT });
    Ok(Widgets::new(config, http, countries, meals)?)
}

/* ---------- 1.  COUNTRIES ---------- */

#[command]
pub async fn countries_input(
    event: InputEvent,
    query: String,
    widgets: tauri::State<'_, Widgets>,
) -> Result<(), String> {
    widgets.countries_input.handle(event, &query).await;
    Ok(())
}

#[command]
pub async fn countries_details(
    index: usize,
    widgets: tauri::State<'_, Widgets>,
) -> Result<CountryDetail, String> {
    widgets.countries.show_details(index).await.map_err(|e| e.to_string())
}

#[command]
pub async fn countries_close(
    target: ModalTarget,
    widgets: tauri::State<'_, Widgets>,
) -> Result<bool, String> {
    Ok(widgets.countries.close_modal(target).await)
}

/* ---------- 2.  MEALS ---------- */

#[command]
pub async fn meals_input(
    event: InputEvent,
    query: String,
    widgets: tauri::State<'_, Widgets>,
) -> Result<(), String> {
    widgets.meals_input.handle(event, &query).await;
    Ok(())
}

#[command]
pub async fn meals_toggle(
    id: String,
    widgets: tauri::State<'_, Widgets>,
) -> Result<PanelState, String> {
    widgets.meals.toggle_details(&id).await.map_err(|e| e.to_string())
}

#[command]
pub async fn meals_featured(widgets: tauri::State<'_, Widgets>) -> Result<(), String> {
    widgets.meals.load_featured().await;
    Ok(())
}
