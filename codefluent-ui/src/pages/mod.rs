//! Pages
//!
//! One page per dashboard tab.

pub mod fluency;
pub mod quickwins;
pub mod recommendations;
pub mod usage;

pub use fluency::FluencyPage;
pub use quickwins::QuickWinsPage;
pub use recommendations::RecommendationsPage;
pub use usage::UsagePage;
