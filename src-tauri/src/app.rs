//! Wires both widgets and their input controllers from one configuration.

use crate::config::{AppConfig, ConfigError};
use crate::countries::{CountriesApi, CountriesWidget};
use crate::http::HttpSource;
use crate::input::InputController;
use crate::meals::{MealsApi, MealsWidget};
use crate::render::Surface;
use std::sync::Arc;
use tracing::info;

/// Per-window widget state, built once and shared by every event handler.
pub struct Widgets {
    pub countries: Arc<CountriesWidget>,
    pub countries_input: InputController,
    pub meals: Arc<MealsWidget>,
    pub meals_input: InputController,
}

impl Widgets {
    pub fn new(
        config: &AppConfig,
        http: Arc<dyn HttpSource>,
        countries_surface: Arc<dyn Surface>,
        meals_surface: Arc<dyn Surface>,
    ) -> Result<Self, ConfigError> {
        let countries = Arc::new(CountriesWidget::new(
            CountriesApi::new(http.clone(), &config.countries)?,
            countries_surface,
        ));
        let meals = Arc::new(MealsWidget::new(
            MealsApi::new(http, &config.meals)?,
            meals_surface,
            config.meals.display_limit,
            config.meals.featured_count,
        ));

        info!(
            debounce_ms = config.input.debounce_ms,
            meal_limit = config.meals.display_limit,
            "widgets ready"
        );

        Ok(Self {
            countries_input: InputController::new(countries.clone(), config.debounce()),
            meals_input: InputController::new(meals.clone(), config.debounce()),
            countries,
            meals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputEvent;
    use crate::testing::{MockSource, RecordingSurface};
    use serde_json::json;

    #[tokio::test]
    async fn widgets_share_one_source_and_keep_separate_surfaces() {
        let source = Arc::new(
            MockSource::new()
                .respond("/name/", json!([]))
                .respond("search.php", json!({"meals": null})),
        );
        let countries_surface = Arc::new(RecordingSurface::new());
        let meals_surface = Arc::new(RecordingSurface::new());
        let widgets = Widgets::new(
            &AppConfig::default(),
            source.clone(),
            countries_surface.clone(),
            meals_surface.clone(),
        )
        .unwrap();

        widgets.countries_input.handle(InputEvent::Submit, "france").await;
        widgets.meals_input.handle(InputEvent::Key("Enter".into()), "stew").await;

        assert_eq!(source.calls().len(), 2);
        assert!(countries_surface.last_results().is_some());
        assert!(meals_surface.last_results().is_some());
        assert_eq!(countries_surface.patches().len(), meals_surface.patches().len());
    }

    #[test]
    fn bad_base_url_is_reported() {
        let mut config = AppConfig::default();
        config.meals.api_url = "::nope::".into();
        let result = Widgets::new(
            &config,
            Arc::new(MockSource::new()),
            Arc::new(RecordingSurface::new()),
            Arc::new(RecordingSurface::new()),
        );
        assert!(matches!(result, Err(ConfigError::InvalidUrl { key: "meals.api_url", .. })));
    }
}
