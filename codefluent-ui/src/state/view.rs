//! View State
//!
//! The last payload of each fetch. Every setter replaces its slot outright
//! and bumps that slot's revision.

use crate::model::{DailyUsage, FluencyScore, QuickWin, Session};
use crate::tabs::Tab;

/// Progress of a user-triggered request
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl Phase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Loading)
    }
}

#[derive(Clone, Debug, Default)]
pub struct ViewState {
    pub usage: Vec<DailyUsage>,
    pub usage_error: Option<String>,
    pub sessions: Vec<Session>,
    pub scores: Option<FluencyScore>,
    pub quickwins: Option<Vec<QuickWin>>,
    usage_rev: u64,
    sessions_rev: u64,
    scores_rev: u64,
    quickwins_rev: u64,
}

impl ViewState {
    pub fn set_usage(&mut self, usage: Vec<DailyUsage>) {
        self.usage = usage;
        self.usage_error = None;
        self.usage_rev += 1;
    }

    pub fn set_usage_error(&mut self, message: String) {
        self.usage = Vec::new();
        self.usage_error = Some(message);
        self.usage_rev += 1;
    }

    pub fn set_sessions(&mut self, sessions: Vec<Session>) {
        self.sessions = sessions;
        self.sessions_rev += 1;
    }

    pub fn set_scores(&mut self, scores: FluencyScore) {
        self.scores = Some(scores);
        self.scores_rev += 1;
    }

    pub fn set_quickwins(&mut self, suggestions: Vec<QuickWin>) {
        self.quickwins = Some(suggestions);
        self.quickwins_rev += 1;
    }

    /// Scores that have at least one scored session
    pub fn scored(&self) -> Option<&FluencyScore> {
        self.scores.as_ref().filter(|s| s.has_scored_sessions())
    }

    /// Data revision a panel would draw, `None` while it has nothing to draw
    pub fn revision(&self, tab: Tab) -> Option<u64> {
        match tab {
            Tab::Usage if !self.usage.is_empty() => Some(self.usage_rev),
            // Session rows on the fluency panel also depend on the session list
            Tab::Fluency if self.scored().is_some() => Some(self.scores_rev + self.sessions_rev),
            Tab::Recommendations if self.scored().is_some() => Some(self.scores_rev),
            Tab::QuickWins if self.quickwins.is_some() => Some(self.quickwins_rev),
            _ => None,
        }
    }
}
