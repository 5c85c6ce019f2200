//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod quickwins;
pub mod scores;
pub mod sessions;
pub mod usage;
