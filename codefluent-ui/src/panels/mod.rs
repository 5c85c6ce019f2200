//! Panel Models
//!
//! Pure view-model builders for each tab. Pages turn these into markup.

pub mod fluency;
pub mod quickwins;
pub mod usage;

/// Shown on the recommendations tab until something has been scored
pub const NO_RECOMMENDATIONS_TEXT: &str =
    "Run a fluency analysis first to get personalized recommendations.";
