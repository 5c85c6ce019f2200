//! Coding Interaction Patterns
//!
//! Six patterns from the skill-formation study. Three of them keep the
//! developer learning; unknown keys from the scorer are carried as
//! [`Pattern::Other`].

use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    ConceptualInquiry,
    GenerationThenComprehension,
    HybridCodeExplanation,
    AiDelegation,
    ProgressiveAiReliance,
    IterativeAiDebugging,
    Other(String),
}

/// Doughnut segment colours, cycled
pub const PATTERN_COLORS: [&str; 6] = [
    "#D97706", "#059669", "#2563EB", "#DC2626", "#7C3AED", "#EC4899",
];

impl Pattern {
    pub fn from_key(key: &str) -> Self {
        match key {
            "conceptual_inquiry" => Pattern::ConceptualInquiry,
            "generation_then_comprehension" => Pattern::GenerationThenComprehension,
            "hybrid_code_explanation" => Pattern::HybridCodeExplanation,
            "ai_delegation" => Pattern::AiDelegation,
            "progressive_ai_reliance" => Pattern::ProgressiveAiReliance,
            "iterative_ai_debugging" => Pattern::IterativeAiDebugging,
            other => Pattern::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Pattern::ConceptualInquiry => "conceptual_inquiry",
            Pattern::GenerationThenComprehension => "generation_then_comprehension",
            Pattern::HybridCodeExplanation => "hybrid_code_explanation",
            Pattern::AiDelegation => "ai_delegation",
            Pattern::ProgressiveAiReliance => "progressive_ai_reliance",
            Pattern::IterativeAiDebugging => "iterative_ai_debugging",
            Pattern::Other(key) => key,
        }
    }

    /// Display label; unknown patterns show their raw key
    pub fn label(&self) -> &str {
        match self {
            Pattern::ConceptualInquiry => "Conceptual Inquiry",
            Pattern::GenerationThenComprehension => "Gen-Then-Comprehension",
            Pattern::HybridCodeExplanation => "Hybrid Code+Explanation",
            Pattern::AiDelegation => "AI Delegation",
            Pattern::ProgressiveAiReliance => "Progressive AI Reliance",
            Pattern::IterativeAiDebugging => "Iterative AI Debugging",
            Pattern::Other(key) => key,
        }
    }

    pub fn is_high_quality(&self) -> bool {
        matches!(
            self,
            Pattern::ConceptualInquiry
                | Pattern::GenerationThenComprehension
                | Pattern::HybridCodeExplanation
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PatternShare {
    pub pattern: Pattern,
    pub count: u32,
    /// Rounded share of all sessions
    pub pct: u32,
}

impl PatternShare {
    pub fn count_label(&self) -> String {
        format!("{} ({}%)", self.count, self.pct)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PatternBreakdown {
    /// Most frequent first
    pub shares: Vec<PatternShare>,
    pub total: u32,
    pub high_quality_pct: u32,
}

impl PatternBreakdown {
    /// At least half the sessions used a high-quality pattern
    pub fn is_good(&self) -> bool {
        self.high_quality_pct >= 50
    }

    pub fn quality_label(&self) -> String {
        format!("{}% high-quality interaction patterns", self.high_quality_pct)
    }
}

fn rounded_pct(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

pub fn pattern_breakdown(distribution: &BTreeMap<String, u32>) -> PatternBreakdown {
    let total: u32 = distribution.values().sum();

    let mut shares: Vec<PatternShare> = distribution
        .iter()
        .map(|(key, &count)| PatternShare {
            pattern: Pattern::from_key(key),
            count,
            pct: rounded_pct(count, total),
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));

    let high_quality: u32 = shares
        .iter()
        .filter(|s| s.pattern.is_high_quality())
        .map(|s| s.count)
        .sum();

    PatternBreakdown {
        shares,
        total,
        high_quality_pct: rounded_pct(high_quality, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_high_quality_share() {
        let breakdown = pattern_breakdown(&dist(&[("ai_delegation", 2), ("conceptual_inquiry", 5)]));
        assert_eq!(breakdown.total, 7);
        assert_eq!(breakdown.high_quality_pct, 71);
        assert!(breakdown.is_good());
        assert_eq!(breakdown.shares[0].pattern, Pattern::ConceptualInquiry);
        assert_eq!(breakdown.shares[0].count_label(), "5 (71%)");
        assert_eq!(breakdown.shares[1].pct, 29);
    }

    #[test]
    fn test_empty_distribution() {
        let breakdown = pattern_breakdown(&BTreeMap::new());
        assert_eq!(breakdown.total, 0);
        assert_eq!(breakdown.high_quality_pct, 0);
        assert!(!breakdown.is_good());
        assert!(breakdown.shares.is_empty());
    }

    #[test]
    fn test_unknown_pattern_keeps_key() {
        let breakdown = pattern_breakdown(&dist(&[("pair_programming", 3), ("unknown", 1)]));
        assert_eq!(breakdown.shares[0].pattern.label(), "pair_programming");
        assert_eq!(breakdown.shares[1].pattern.key(), "unknown");
        assert_eq!(breakdown.high_quality_pct, 0);
    }

    #[test]
    fn test_quality_labels() {
        assert!(Pattern::from_key("hybrid_code_explanation").is_high_quality());
        assert!(!Pattern::from_key("iterative_ai_debugging").is_high_quality());
        assert_eq!(Pattern::AiDelegation.label(), "AI Delegation");
    }
}
