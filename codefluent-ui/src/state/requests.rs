//! Request Sequencing
//!
//! Every fetch takes a token for its slot. Only the newest token issued for a
//! slot may write its response back; anything older is dropped.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestSlot {
    Usage,
    Sessions,
    /// Shared by POST /api/score and GET /api/scores
    Scores,
    QuickWins,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken {
    slot: RequestSlot,
    seq: u64,
}

#[derive(Debug, Default)]
pub struct RequestTracker {
    next_seq: u64,
    latest: HashMap<RequestSlot, u64>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, slot: RequestSlot) -> RequestToken {
        self.next_seq += 1;
        self.latest.insert(slot, self.next_seq);
        RequestToken {
            slot,
            seq: self.next_seq,
        }
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.latest.get(&token.slot) == Some(&token.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_response_is_discarded() {
        let mut tracker = RequestTracker::new();
        let first = tracker.begin(RequestSlot::Scores);
        let second = tracker.begin(RequestSlot::Scores);

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_slots_are_independent() {
        let mut tracker = RequestTracker::new();
        let usage = tracker.begin(RequestSlot::Usage);
        let scores = tracker.begin(RequestSlot::Scores);
        let quickwins = tracker.begin(RequestSlot::QuickWins);

        assert!(tracker.is_current(usage));
        assert!(tracker.is_current(scores));
        assert!(tracker.is_current(quickwins));
    }

    #[test]
    fn test_cached_scores_lose_to_fresh_scoring() {
        let mut tracker = RequestTracker::new();
        let cached = tracker.begin(RequestSlot::Scores);
        let fresh = tracker.begin(RequestSlot::Scores);

        // cached GET resolves last but must not overwrite the fresh result
        assert!(!tracker.is_current(cached));
        assert!(tracker.is_current(fresh));
    }
}
