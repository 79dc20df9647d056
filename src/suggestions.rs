mod debouncer;
pub mod suggestion_render;
mod suggestion_state;

pub use debouncer::Debouncer;
pub use suggestion_state::{MAX_VISIBLE_SUGGESTIONS, SuggestionListState};
