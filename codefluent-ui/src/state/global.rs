//! Global Application State
//!
//! Reactive state shared through Leptos context, plus the actions that fetch
//! data into it.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use super::requests::{RequestSlot, RequestToken, RequestTracker};
use super::view::{Phase, ViewState};
use crate::api;
use crate::charts::{CanvasChart, ChartRegistry, ChartSlot};
use crate::fluency::pattern_breakdown;
use crate::panels::fluency::{pattern_chart, scoring_ids};
use crate::panels::usage::{cost_chart, token_chart};
use crate::tabs::{Tab, TabController};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Last payload of every fetch
    pub view: RwSignal<ViewState>,
    pub tabs: RwSignal<TabController>,
    /// Run-analysis button state
    pub scoring: RwSignal<Phase>,
    /// Generate-suggestions button state
    pub quickwins: RwSignal<Phase>,
    requests: Rc<RefCell<RequestTracker>>,
    charts: Rc<RefCell<ChartRegistry<CanvasChart>>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() -> GlobalState {
    let state = GlobalState {
        view: create_rw_signal(ViewState::default()),
        tabs: create_rw_signal(TabController::new()),
        scoring: create_rw_signal(Phase::Idle),
        quickwins: create_rw_signal(Phase::Idle),
        requests: Rc::new(RefCell::new(RequestTracker::new())),
        charts: Rc::new(RefCell::new(ChartRegistry::new())),
    };

    provide_context(state.clone());
    state
}

pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

fn log_error(context: &str, err: &api::ApiError) {
    web_sys::console::error_1(&format!("{}: {}", context, err).into());
}

impl GlobalState {
    fn begin(&self, slot: RequestSlot) -> RequestToken {
        self.requests.borrow_mut().begin(slot)
    }

    fn is_current(&self, token: RequestToken) -> bool {
        self.requests.borrow().is_current(token)
    }

    /// Page-load fetches: usage, sessions and any cached scores
    pub fn load_initial(&self) {
        self.load_usage();
        self.load_sessions();
        self.load_cached_scores();
    }

    fn load_usage(&self) {
        let token = self.begin(RequestSlot::Usage);
        let state = self.clone();
        spawn_local(async move {
            let result = api::fetch_usage().await;
            if !state.is_current(token) {
                return;
            }
            match result {
                Ok(daily) => state.view.update(|v| v.set_usage(daily)),
                Err(e) => {
                    log_error("Failed to load usage", &e);
                    state.view.update(|v| v.set_usage_error(e.to_string()));
                }
            }
        });
    }

    fn load_sessions(&self) {
        let token = self.begin(RequestSlot::Sessions);
        let state = self.clone();
        spawn_local(async move {
            let result = api::fetch_sessions().await;
            if !state.is_current(token) {
                return;
            }
            match result {
                Ok(sessions) => state.view.update(|v| v.set_sessions(sessions)),
                Err(e) => log_error("Failed to load sessions", &e),
            }
        });
    }

    /// Failures are ignored; scoring can still be run by hand
    fn load_cached_scores(&self) {
        let token = self.begin(RequestSlot::Scores);
        let state = self.clone();
        spawn_local(async move {
            let result = api::fetch_cached_scores().await;
            if !state.is_current(token) {
                return;
            }
            if let Ok(score) = result {
                if score.has_scored_sessions() {
                    state.view.update(|v| v.set_scores(score));
                }
            }
        });
    }

    /// Scores the first `count` sessions. Does nothing without sessions or
    /// while a run is in flight.
    pub fn run_scoring(&self, count: usize) {
        let ids = self.view.with_untracked(|v| scoring_ids(&v.sessions, count));
        if ids.is_empty() || self.scoring.get_untracked().is_busy() {
            return;
        }

        self.scoring.set(Phase::Loading);
        // Runs never overlap; the token only makes a slower cached-scores
        // fetch from page load stale
        self.begin(RequestSlot::Scores);
        let state = self.clone();
        spawn_local(async move {
            match api::score_sessions(ids).await {
                Ok(score) => {
                    state.view.update(|v| v.set_scores(score));
                    state.scoring.set(Phase::Success);
                }
                Err(e) => {
                    log_error("Scoring failed", &e);
                    state.scoring.set(Phase::Error(e.to_string()));
                }
            }
        });
    }

    pub fn load_quickwins(&self) {
        if self.quickwins.get_untracked().is_busy() {
            return;
        }

        self.quickwins.set(Phase::Loading);
        let token = self.begin(RequestSlot::QuickWins);
        let state = self.clone();
        spawn_local(async move {
            let result = api::fetch_quickwins().await;
            if !state.is_current(token) {
                state.quickwins.set(Phase::Idle);
                return;
            }
            match result {
                Ok(response) => match response.error {
                    Some(message) if response.suggestions.is_empty() => {
                        state.quickwins.set(Phase::Error(message));
                    }
                    _ => {
                        state.view.update(|v| v.set_quickwins(response.suggestions));
                        state.quickwins.set(Phase::Success);
                    }
                },
                Err(e) => {
                    log_error("Failed to load quick wins", &e);
                    state.quickwins.set(Phase::Error(e.to_string()));
                }
            }
        });
    }

    pub fn select_tab(&self, tab: Tab) {
        self.tabs.update(|t| t.select(tab));
    }

    /// Draws the charts of `tab` from the current view state
    pub fn render_charts(&self, tab: Tab) {
        let mut charts = self.charts.borrow_mut();
        self.view.with_untracked(|view| match tab {
            Tab::Usage => {
                let tokens = token_chart(&view.usage);
                let cost = cost_chart(&view.usage);
                charts.render(ChartSlot::Usage, || {
                    CanvasChart::draw(ChartSlot::Usage.canvas_id(), &tokens)
                });
                charts.render(ChartSlot::Cost, || {
                    CanvasChart::draw(ChartSlot::Cost.canvas_id(), &cost)
                });
            }
            Tab::Fluency => {
                let spec = view
                    .scored()
                    .map(|score| pattern_breakdown(&score.aggregate.pattern_distribution))
                    .and_then(|breakdown| pattern_chart(&breakdown));
                match spec {
                    Some(spec) => {
                        charts.render(ChartSlot::Pattern, || {
                            CanvasChart::draw(ChartSlot::Pattern.canvas_id(), &spec)
                        });
                    }
                    None => charts.release(ChartSlot::Pattern),
                }
            }
            Tab::QuickWins | Tab::Recommendations => {}
        });
    }
}
