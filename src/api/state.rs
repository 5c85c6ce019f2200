//! Application State
//!
//! Shared state accessible by all API handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::data::DataStore;
use crate::quickwins::QuickWinSource;
use crate::scoring::ScoringService;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Data directory
    pub store: DataStore,
    /// Score cache plus external scorer
    pub scoring: Arc<ScoringService>,
    /// Quick-win generator or file
    pub quickwins: Arc<dyn QuickWinSource>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        store: DataStore,
        scoring: ScoringService,
        quickwins: Box<dyn QuickWinSource>,
    ) -> Self {
        Self {
            store,
            scoring: Arc::new(scoring),
            quickwins: Arc::from(quickwins),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
