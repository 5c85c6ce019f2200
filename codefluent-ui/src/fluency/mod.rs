//! Fluency Model
//!
//! Benchmarked behaviors, interaction patterns and the recommendation rules
//! derived from them.

pub mod behavior;
pub mod pattern;
pub mod recommendations;

pub use behavior::{behavior_bars, Behavior, BehaviorBar};
pub use pattern::{pattern_breakdown, Pattern, PatternBreakdown, PatternShare, PATTERN_COLORS};
pub use recommendations::{recommend, Impact, Recommendation, RecommendationPlan, RESEARCH_SOURCES};

/// Traffic-light colouring shared by the gauge, session scores and behavior bars
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

impl Tone {
    /// Tone of a 0-100 score: green from 70, amber from 50
    pub fn for_score(score: f64) -> Self {
        if score >= 70.0 {
            Tone::Success
        } else if score >= 50.0 {
            Tone::Warning
        } else {
            Tone::Danger
        }
    }

    /// Hex colour used for strokes, fills and inline text colour
    pub fn color(self) -> &'static str {
        match self {
            Tone::Success => "#059669",
            Tone::Warning => "#D97706",
            Tone::Danger => "#DC2626",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "color-success",
            Tone::Warning => "color-warning",
            Tone::Danger => "color-danger",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tone_thresholds() {
        assert_eq!(Tone::for_score(70.0), Tone::Success);
        assert_eq!(Tone::for_score(69.9), Tone::Warning);
        assert_eq!(Tone::for_score(50.0), Tone::Warning);
        assert_eq!(Tone::for_score(49.0), Tone::Danger);
    }

    #[test]
    fn test_tone_colors_are_distinct_hex() {
        let colors = [Tone::Success.color(), Tone::Warning.color(), Tone::Danger.color()];
        for color in colors {
            assert!(color.starts_with('#') && color.len() == 7, "{}", color);
        }
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
