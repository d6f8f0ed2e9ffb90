//! Search box handling: query parsing, debouncing, submit vs. keystroke routing.

pub mod controller;
pub mod debounce;
pub mod query;
pub mod sequence;

pub use controller::{InputController, InputEvent, SearchTarget};
pub use debounce::Debouncer;
pub use query::SearchQuery;
pub use sequence::SearchSequence;
