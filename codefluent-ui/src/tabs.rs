//! Tab Controller
//!
//! Tracks the visible panel and which data revision each panel last drew, so
//! charts are only rebuilt when a panel becomes visible with new data.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Usage,
    Fluency,
    QuickWins,
    Recommendations,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Usage, Tab::Fluency, Tab::QuickWins, Tab::Recommendations];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Usage => "usage",
            Tab::Fluency => "fluency",
            Tab::QuickWins => "quickwins",
            Tab::Recommendations => "recommendations",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Usage => "Usage",
            Tab::Fluency => "Fluency Score",
            Tab::QuickWins => "Quick Wins",
            Tab::Recommendations => "Recommendations",
        }
    }

    pub fn panel_id(self) -> String {
        format!("tab-{}", self.key())
    }
}

#[derive(Clone, Debug, Default)]
pub struct TabController {
    active: Tab,
    rendered: HashMap<Tab, u64>,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }

    /// `revision` is `None` while the panel has no data
    pub fn needs_render(&self, tab: Tab, revision: Option<u64>) -> bool {
        match revision {
            Some(rev) => self.rendered.get(&tab) != Some(&rev),
            None => false,
        }
    }

    pub fn mark_rendered(&mut self, tab: Tab, revision: u64) {
        self.rendered.insert(tab, revision);
    }

    /// Shows `tab` and reports whether its panel must draw. A `true` result
    /// also records the revision as drawn.
    pub fn activate(&mut self, tab: Tab, revision: Option<u64>) -> bool {
        self.select(tab);
        if !self.needs_render(tab, revision) {
            return false;
        }
        if let Some(rev) = revision {
            self.mark_rendered(tab, rev);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_is_default() {
        let tabs = TabController::new();
        assert_eq!(tabs.active(), Tab::Usage);
        assert!(tabs.is_active(Tab::Usage));
        assert!(!tabs.is_active(Tab::Fluency));
    }

    #[test]
    fn test_panel_ids() {
        let ids: Vec<_> = Tab::ALL.iter().map(|t| t.panel_id()).collect();
        assert_eq!(
            ids,
            vec!["tab-usage", "tab-fluency", "tab-quickwins", "tab-recommendations"]
        );
    }

    #[test]
    fn test_render_once_per_revision() {
        let mut tabs = TabController::new();

        assert!(!tabs.activate(Tab::Fluency, None));
        assert!(tabs.is_active(Tab::Fluency));

        assert!(tabs.activate(Tab::Fluency, Some(1)));
        assert!(!tabs.activate(Tab::Fluency, Some(1)));

        tabs.select(Tab::Usage);
        assert!(!tabs.activate(Tab::Fluency, Some(1)));
        assert!(tabs.activate(Tab::Fluency, Some(2)));
    }

    #[test]
    fn test_panels_track_revisions_separately() {
        let mut tabs = TabController::new();
        assert!(tabs.activate(Tab::Usage, Some(1)));
        assert!(tabs.needs_render(Tab::Fluency, Some(1)));
        assert!(!tabs.needs_render(Tab::Usage, Some(1)));
    }
}
