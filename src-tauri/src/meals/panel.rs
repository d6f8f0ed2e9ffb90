//! Per-card recipe panel.

use super::model::{present, Meal};
use serde::{Deserialize, Serialize};

pub const SHOW_LABEL: &str = "Show Recipe";
pub const HIDE_LABEL: &str = "Hide Recipe";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PanelState {
    Collapsed,
    Expanded,
}

impl PanelState {
    /// Label of the control that flips the panel out of this state.
    pub fn label(self) -> &'static str {
        match self {
            PanelState::Collapsed => SHOW_LABEL,
            PanelState::Expanded => HIDE_LABEL,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recipe {
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub youtube: Option<String>,
    pub source: Option<String>,
}

impl From<&Meal> for Recipe {
    fn from(meal: &Meal) -> Self {
        Self {
            ingredients: meal.ingredients(),
            instructions: meal.instructions.clone().unwrap_or_default(),
            youtube: present(&meal.youtube),
            source: present(&meal.source),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PanelView {
    pub id: String,
    pub state: PanelState,
    pub label: String,
    /// Present only while expanded.
    pub recipe: Option<Recipe>,
}

impl PanelView {
    pub fn collapsed(id: &str) -> Self {
        Self {
            id: id.to_string(),
            state: PanelState::Collapsed,
            label: PanelState::Collapsed.label().to_string(),
            recipe: None,
        }
    }

    pub fn expanded(id: &str, recipe: Recipe) -> Self {
        Self {
            id: id.to_string(),
            state: PanelState::Expanded,
            label: PanelState::Expanded.label().to_string(),
            recipe: Some(recipe),
        }
    }
}
