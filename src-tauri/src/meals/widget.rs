use super::api::MealsApi;
use super::model::Meal;
use super::panel::{PanelState, PanelView, Recipe};
use crate::error::{FetchResult, WidgetError};
use crate::input::{SearchQuery, SearchSequence, SearchTarget};
use crate::render::{Card, ControlsState, Patch, ResultsView, Surface};
use async_trait::async_trait;
use futures::future::try_join_all;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

pub const NO_RESULTS: &str = "No meals found.";

#[derive(Default)]
struct MealsState {
    results: Vec<Meal>,
    expanded: HashSet<String>,
    /// Bumped whenever the cards are replaced.
    generation: u64,
}

pub struct MealsWidget {
    api: MealsApi,
    surface: Arc<dyn Surface>,
    sequence: SearchSequence,
    display_limit: usize,
    featured_count: usize,
    state: Mutex<MealsState>,
}

impl MealsWidget {
    pub fn new(
        api: MealsApi,
        surface: Arc<dyn Surface>,
        display_limit: usize,
        featured_count: usize,
    ) -> Self {
        Self {
            api,
            surface,
            sequence: SearchSequence::new(),
            display_limit,
            featured_count,
            state: Mutex::new(MealsState::default()),
        }
    }

    pub async fn run_search(&self, query: SearchQuery) {
        let ticket = self.sequence.next();
        self.surface.apply(Patch::Controls(ControlsState::busy()));
        self.surface.apply(Patch::Results(ResultsView::Loading));

        let outcome = self.api.search(&query).await;
        if self.sequence.is_current(ticket) {
            self.render(outcome, &query.to_string()).await;
        } else {
            debug!(query = %query, ticket = ticket, "discarding stale meal results");
        }

        self.surface.apply(Patch::Controls(ControlsState::idle()));
    }

    /// Fetch `featured_count` random meals concurrently and show them once all arrive.
    pub async fn load_featured(&self) {
        let ticket = self.sequence.next();
        self.surface.apply(Patch::Results(ResultsView::Loading));

        let requests = (0..self.featured_count).map(|_| self.api.random());
        let outcome: FetchResult<Vec<Meal>> = try_join_all(requests)
            .await
            .map(|batch| batch.into_iter().flatten().collect());

        if self.sequence.is_current(ticket) {
            self.render(outcome, "featured").await;
        } else {
            debug!(ticket = ticket, "discarding stale featured meals");
        }
    }

    async fn render(&self, outcome: FetchResult<Vec<Meal>>, label: &str) {
        match outcome {
            Ok(mut meals) => {
                meals.truncate(self.display_limit);
                info!(source = label, count = meals.len(), "rendering meals");
                let cards = meals.iter().map(card).collect();
                {
                    let mut state = self.state.lock().await;
                    state.results = meals;
                    state.expanded.clear();
                    state.generation += 1;
                }
                self.surface
                    .apply(Patch::Results(ResultsView::from_cards(cards, NO_RESULTS)));
            }
            Err(err) => {
                warn!(source = label, error = %err, "meal search failed");
                self.surface.apply(Patch::Results(ResultsView::error(err)));
            }
        }
    }

    /// Expand or collapse the recipe panel of card `id`. Collapsing never fetches;
    /// a failed expansion leaves the panel collapsed.
    pub async fn toggle_details(&self, id: &str) -> Result<PanelState, WidgetError> {
        let generation = {
            let mut state = self.state.lock().await;
            if !state.results.iter().any(|m| m.id == id) {
                return Err(WidgetError::UnknownItem(id.to_string()));
            }
            if state.expanded.remove(id) {
                self.surface.apply(Patch::Panel(PanelView::collapsed(id)));
                return Ok(PanelState::Collapsed);
            }
            state.generation
        };

        let meal = match self.api.lookup(id).await {
            Ok(Some(meal)) => meal,
            Ok(None) => {
                error!(id = %id, "meal lookup returned no record");
                return Ok(PanelState::Collapsed);
            }
            Err(err) => {
                error!(id = %id, error = %err, "meal lookup failed");
                return Ok(PanelState::Collapsed);
            }
        };

        let mut state = self.state.lock().await;
        if state.generation != generation {
            debug!(id = %id, "cards replaced while loading recipe");
            return Ok(PanelState::Collapsed);
        }
        state.expanded.insert(id.to_string());
        self.surface
            .apply(Patch::Panel(PanelView::expanded(id, Recipe::from(&meal))));
        Ok(PanelState::Expanded)
    }

    pub async fn panel_state(&self, id: &str) -> PanelState {
        if self.state.lock().await.expanded.contains(id) {
            PanelState::Expanded
        } else {
            PanelState::Collapsed
        }
    }
}

#[async_trait]
impl SearchTarget for MealsWidget {
    async fn search(&self, raw: &str) {
        match SearchQuery::parse(raw) {
            Some(query) => self.run_search(query).await,
            None => debug!("ignoring blank meal query"),
        }
    }
}

fn card(meal: &Meal) -> Card {
    Card {
        key: meal.id.clone(),
        image: meal.thumbnail.clone(),
        image_alt: meal.name.clone(),
        title: meal.name.clone(),
        description: meal.summary(),
        action_label: PanelState::Collapsed.label().to_string(),
    }
}
