use super::api::CountriesApi;
use super::detail::{CountryDetail, WeatherView};
use super::model::Country;
use crate::error::WidgetError;
use crate::input::{SearchQuery, SearchSequence, SearchTarget};
use crate::render::{Card, ControlsState, Patch, ResultsView, Surface};
use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

pub const NO_RESULTS: &str = "No countries found.";
pub const DETAILS_LABEL: &str = "More Details";

/// What a click on the open modal landed on.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModalTarget {
    CloseButton,
    Overlay,
    Content,
}

#[derive(Default)]
struct CountriesState {
    results: Vec<Country>,
    modal_open: bool,
}

pub struct CountriesWidget {
    api: CountriesApi,
    surface: Arc<dyn Surface>,
    sequence: SearchSequence,
    state: Mutex<CountriesState>,
}

impl CountriesWidget {
    pub fn new(api: CountriesApi, surface: Arc<dyn Surface>) -> Self {
        Self {
            api,
            surface,
            sequence: SearchSequence::new(),
            state: Mutex::new(CountriesState::default()),
        }
    }

    pub async fn run_search(&self, query: SearchQuery) {
        let ticket = self.sequence.next();
        self.surface.apply(Patch::Controls(ControlsState::busy()));
        self.surface.apply(Patch::Results(ResultsView::Loading));

        let outcome = self.api.search(&query).await;

        if self.sequence.is_current(ticket) {
            match outcome {
                Ok(countries) => {
                    info!(query = %query, count = countries.len(), "rendering countries");
                    let cards = countries.iter().enumerate().map(|(i, c)| card(i, c)).collect();
                    self.state.lock().await.results = countries;
                    self.surface
                        .apply(Patch::Results(ResultsView::from_cards(cards, NO_RESULTS)));
                }
                Err(err) => {
                    warn!(query = %query, error = %err, "country search failed");
                    self.surface.apply(Patch::Results(ResultsView::error(err)));
                }
            }
        } else {
            debug!(query = %query, ticket = ticket, "discarding stale country results");
        }

        self.surface.apply(Patch::Controls(ControlsState::idle()));
    }

    /// Fill and open the modal for the country at `index` of the current results.
    pub async fn show_details(&self, index: usize) -> Result<CountryDetail, WidgetError> {
        let country = self
            .state
            .lock()
            .await
            .results
            .get(index)
            .cloned()
            .ok_or_else(|| WidgetError::UnknownItem(index.to_string()))?;

        let mut detail = CountryDetail::from_country(&country);
        detail.weather = match country.coordinates() {
            Some((lat, lon)) => match self.api.weather(lat, lon).await {
                Ok(current) => WeatherView::from(&current),
                Err(err) => {
                    warn!(country = %detail.name, error = %err, "weather lookup failed");
                    WeatherView::unknown()
                }
            },
            None => {
                warn!(country = %detail.name, "no coordinates for weather lookup");
                WeatherView::unknown()
            }
        };

        self.state.lock().await.modal_open = true;
        self.surface.apply(Patch::ModalOpened(Box::new(detail.clone())));
        Ok(detail)
    }

    /// Returns whether the click closed the modal.
    pub async fn close_modal(&self, target: ModalTarget) -> bool {
        if target == ModalTarget::Content {
            return false;
        }
        let mut state = self.state.lock().await;
        if !state.modal_open {
            return false;
        }
        state.modal_open = false;
        self.surface.apply(Patch::ModalClosed);
        true
    }

    pub async fn is_modal_open(&self) -> bool {
        self.state.lock().await.modal_open
    }

    pub async fn result_count(&self) -> usize {
        self.state.lock().await.results.len()
    }
}

#[async_trait]
impl SearchTarget for CountriesWidget {
    async fn search(&self, raw: &str) {
        match SearchQuery::parse(raw) {
            Some(query) => self.run_search(query).await,
            None => debug!("ignoring blank country query"),
        }
    }
}

fn card(index: usize, country: &Country) -> Card {
    let name = &country.name.common;
    Card {
        key: index.to_string(),
        image: country.flag_url().map(str::to_string),
        image_alt: format!("Flag of {}", name),
        title: name.clone(),
        description: format!(
            "Region: {}",
            country.region.as_deref().unwrap_or(super::detail::NOT_AVAILABLE)
        ),
        action_label: DETAILS_LABEL.to_string(),
    }
}
