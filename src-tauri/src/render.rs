//! View models emitted by the widgets and the surface they are applied to.

use crate::countries::detail::CountryDetail;
use crate::meals::panel::PanelView;
use serde::{Deserialize, Serialize};

pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";

/// Enabled state and button label of a widget's search controls.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ControlsState {
    pub enabled: bool,
    pub label: String,
}

impl ControlsState {
    pub fn idle() -> Self {
        Self {
            enabled: true,
            label: SEARCH_LABEL.to_string(),
        }
    }

    pub fn busy() -> Self {
        Self {
            enabled: false,
            label: SEARCHING_LABEL.to_string(),
        }
    }
}

/// Summary of one result item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Card {
    /// Index (countries) or identifier (meals) passed back by the detail control.
    pub key: String,
    pub image: Option<String>,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub action_label: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ResultsView {
    Loading,
    Empty { message: String },
    Error { message: String },
    Cards { cards: Vec<Card> },
}

impl ResultsView {
    pub fn error(err: impl std::fmt::Display) -> Self {
        ResultsView::Error {
            message: format!("Error: {}", err),
        }
    }

    /// Cards, or `empty_message` when there are none.
    pub fn from_cards(cards: Vec<Card>, empty_message: &str) -> Self {
        if cards.is_empty() {
            ResultsView::Empty {
                message: empty_message.to_string(),
            }
        } else {
            ResultsView::Cards { cards }
        }
    }

    pub fn cards(&self) -> &[Card] {
        match self {
            ResultsView::Cards { cards } => cards,
            _ => &[],
        }
    }
}

/// A single render instruction.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Patch {
    Controls(ControlsState),
    Results(ResultsView),
    ModalOpened(Box<CountryDetail>),
    ModalClosed,
    Panel(PanelView),
}

/// Where a widget's patches end up: a webview, a log, a test recorder.
pub trait Surface: Send + Sync {
    fn apply(&self, patch: Patch);
}
