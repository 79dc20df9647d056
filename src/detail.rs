pub mod detail_render;
mod detail_state;

pub use detail_state::{Article, DetailContent, DetailState};
