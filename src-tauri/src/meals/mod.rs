//! Recipe finder: TheMealDB search, featured meals, inline recipe panels.

pub mod api;
pub mod model;
pub mod panel;
pub mod widget;

pub use api::MealsApi;
pub use model::{Meal, MAX_INGREDIENTS};
pub use panel::{PanelState, PanelView, Recipe};
pub use widget::MealsWidget;
