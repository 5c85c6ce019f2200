//! Aggregate fluency metrics across scored sessions.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::data::SessionScore;

/// Behavioral indicators every scored session is assessed on
pub const BEHAVIORS: [&str; 11] = [
    "iteration_and_refinement",
    "clarifying_goals",
    "specifying_format",
    "providing_examples",
    "setting_interaction_terms",
    "checking_facts",
    "questioning_reasoning",
    "identifying_missing_context",
    "adjusting_approach",
    "building_on_responses",
    "providing_feedback",
];

const UNKNOWN_PATTERN: &str = "unknown";

/// Cross-session summary served next to the per-session scores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aggregate {
    pub sessions_scored: usize,
    pub average_score: u32,
    pub behavior_prevalence: BTreeMap<String, f64>,
    pub pattern_distribution: BTreeMap<String, u32>,
}

/// Aggregate over entries carrying a behavior assessment.
///
/// Returns `None` when no entry qualifies.
pub fn compute_aggregate<'a>(scores: impl IntoIterator<Item = &'a SessionScore>) -> Option<Aggregate> {
    let scored: Vec<&SessionScore> = scores.into_iter().filter(|s| s.is_scored()).collect();
    if scored.is_empty() {
        return None;
    }

    let n = scored.len() as f64;

    let behavior_prevalence = BEHAVIORS
        .iter()
        .map(|behavior| {
            let count = scored
                .iter()
                .filter(|s| {
                    s.fluency_behaviors
                        .as_ref()
                        .and_then(|b| b.get(*behavior))
                        .copied()
                        .unwrap_or(false)
                })
                .count();
            (behavior.to_string(), round2(count as f64 / n))
        })
        .collect();

    let mut pattern_distribution = BTreeMap::new();
    for score in &scored {
        let pattern = score.coding_pattern.as_deref().unwrap_or(UNKNOWN_PATTERN);
        *pattern_distribution.entry(pattern.to_string()).or_insert(0) += 1;
    }

    let total: f64 = scored.iter().map(|s| s.overall_score.unwrap_or(0.0)).sum();
    let average_score = (total / n).round().clamp(0.0, 100.0) as u32;

    Some(Aggregate {
        sessions_scored: scored.len(),
        average_score,
        behavior_prevalence,
        pattern_distribution,
    })
}

/// Aggregate as served over HTTP: an empty object when nothing was scored
pub fn aggregate_json(aggregate: Option<&Aggregate>) -> serde_json::Value {
    aggregate
        .and_then(|a| serde_json::to_value(a).ok())
        .unwrap_or_else(|| serde_json::json!({}))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(behaviors: &[&str], pattern: Option<&str>, overall: Option<f64>) -> SessionScore {
        SessionScore {
            fluency_behaviors: Some(
                BEHAVIORS
                    .iter()
                    .map(|b| (b.to_string(), behaviors.contains(b)))
                    .collect(),
            ),
            coding_pattern: pattern.map(str::to_string),
            overall_score: overall,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_is_none() {
        assert!(compute_aggregate(std::iter::empty()).is_none());
        let failed = SessionScore::failed("x", "boom");
        assert!(compute_aggregate([&failed]).is_none());
        assert_eq!(aggregate_json(None), serde_json::json!({}));
    }

    #[test]
    fn test_prevalence_and_average() {
        let a = scored(&["checking_facts", "clarifying_goals"], Some("conceptual_inquiry"), Some(80.0));
        let b = scored(&["checking_facts"], Some("ai_delegation"), Some(61.0));
        let c = scored(&[], Some("conceptual_inquiry"), Some(50.0));
        let failed = SessionScore::failed("d", "timeout");

        let agg = compute_aggregate([&a, &b, &c, &failed]).unwrap();

        assert_eq!(agg.sessions_scored, 3);
        assert_eq!(agg.average_score, 64); // 191 / 3 = 63.67
        assert_eq!(agg.behavior_prevalence["checking_facts"], 0.67);
        assert_eq!(agg.behavior_prevalence["clarifying_goals"], 0.33);
        assert_eq!(agg.behavior_prevalence["providing_feedback"], 0.0);
        assert_eq!(agg.behavior_prevalence.len(), BEHAVIORS.len());
        assert_eq!(agg.pattern_distribution["conceptual_inquiry"], 2);
        assert_eq!(agg.pattern_distribution["ai_delegation"], 1);
    }

    #[test]
    fn test_missing_pattern_and_score() {
        let a = scored(&[], None, None);
        let agg = compute_aggregate([&a]).unwrap();
        assert_eq!(agg.pattern_distribution["unknown"], 1);
        assert_eq!(agg.average_score, 0);
    }

    #[test]
    fn test_missing_behavior_counts_as_false() {
        let mut a = scored(&["checking_facts"], None, Some(70.0));
        a.fluency_behaviors.as_mut().unwrap().remove("checking_facts");
        let agg = compute_aggregate([&a]).unwrap();
        assert_eq!(agg.behavior_prevalence["checking_facts"], 0.0);
    }
}
