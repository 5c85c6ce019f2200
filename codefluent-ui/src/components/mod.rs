//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod nav;
pub mod prompt_box;
pub mod score_ring;

pub use chart::ChartCanvas;
pub use loading::{EmptyState, Loading};
pub use nav::Nav;
pub use prompt_box::{CopyButton, PromptBox};
pub use score_ring::ScoreRing;
