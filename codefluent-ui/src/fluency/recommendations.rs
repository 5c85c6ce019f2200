//! Recommendations
//!
//! Rules turning an aggregate into prioritized advice. Behavior rules fire
//! when prevalence falls below their threshold; pattern rules fire whenever
//! the pattern shows up at all.

use super::behavior::Behavior;
use crate::model::Aggregate;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, PartialEq)]
pub struct Recommendation {
    pub impact: Impact,
    pub title: &'static str,
    pub advice: &'static str,
    pub action: Option<&'static str>,
    pub source: &'static str,
    pub prompt: Option<&'static str>,
}

struct BehaviorRule {
    behavior: Behavior,
    threshold: f64,
    recommendation: Recommendation,
}

struct PatternRule {
    pattern: &'static str,
    recommendation: Recommendation,
}

const FLUENCY_INDEX: &str = "Anthropic AI Fluency Index (Feb 2026)";
const SKILLS_STUDY: &str = "Anthropic Coding Skills Formation Study (Jan 2026)";

static BEHAVIOR_RULES: [BehaviorRule; 5] = [
    BehaviorRule {
        behavior: Behavior::SettingInteractionTerms,
        threshold: 0.30,
        recommendation: Recommendation {
            impact: Impact::High,
            title: "Set Interaction Terms More Often",
            advice: "Tell Claude how to interact: 'Push back if my approach seems wrong', 'Explain your uncertainty'. Only ~30% of users do this.",
            action: Some("Add to your CLAUDE.md: 'Always explain trade-offs. Push back if my approach seems suboptimal.'"),
            source: FLUENCY_INDEX,
            prompt: Some("Before we start, here are my interaction preferences: always explain trade-offs between approaches, push back if my approach seems suboptimal, and flag any assumptions you're making. Let's begin."),
        },
    },
    BehaviorRule {
        behavior: Behavior::CheckingFacts,
        threshold: 0.35,
        recommendation: Recommendation {
            impact: Impact::High,
            title: "Verify Claims After Code Generation",
            advice: "When Claude produces code or technical claims, ask: 'Are you sure this API exists in v4?' Fact-checking drops 3.7pp when generating artifacts.",
            action: Some("After code generation, ask one verification question before accepting."),
            source: FLUENCY_INDEX,
            prompt: Some("Before I accept this code, can you verify: are all the APIs and methods you used actually available in the current version? List any that you're uncertain about."),
        },
    },
    BehaviorRule {
        behavior: Behavior::QuestioningReasoning,
        threshold: 0.40,
        recommendation: Recommendation {
            impact: Impact::Medium,
            title: "Ask 'Why This Approach?'",
            advice: "'Why did you choose this approach over X?' Especially for architecture decisions.",
            action: Some("Before accepting a design, ask Claude to compare alternatives."),
            source: FLUENCY_INDEX,
            prompt: Some("Why did you choose this approach? What are 2-3 alternative approaches you considered, and what are the trade-offs of each?"),
        },
    },
    BehaviorRule {
        behavior: Behavior::IdentifyingMissingContext,
        threshold: 0.25,
        recommendation: Recommendation {
            impact: Impact::Medium,
            title: "Check for Missing Context",
            advice: "Ask: 'What assumptions are you making here?' or 'What context would help you do this better?'",
            action: Some("At the start of complex tasks, ask Claude what it needs to know."),
            source: FLUENCY_INDEX,
            prompt: Some("Before you start, what assumptions are you making about this codebase? What additional context or files would help you do a better job?"),
        },
    },
    BehaviorRule {
        behavior: Behavior::ProvidingExamples,
        threshold: 0.30,
        recommendation: Recommendation {
            impact: Impact::Medium,
            title: "Show Examples of What You Want",
            advice: "Paste a code snippet and say 'follow this pattern'. Examples dramatically improve output quality.",
            action: Some("When requesting code, include at least one example of the style you want."),
            source: "Anthropic AI Fluency Index / Best Practices",
            prompt: Some("Here's an example of the code style I want you to follow:\n\n```\n// [paste your example here]\n```\n\nPlease match this pattern for the new code you write."),
        },
    },
];

static PATTERN_RULES: [PatternRule; 3] = [
    PatternRule {
        pattern: "ai_delegation",
        recommendation: Recommendation {
            impact: Impact::High,
            title: "You're Delegating Too Much",
            advice: "You're offloading entire tasks without engaging. Ask 'How does this work?' after code generation. Comprehension scores 86% for conceptual inquiry vs <40% for delegation.",
            action: None,
            source: SKILLS_STUDY,
            prompt: Some("Before you implement this, walk me through your planned approach step by step. I want to understand the design before you write code."),
        },
    },
    PatternRule {
        pattern: "progressive_ai_reliance",
        recommendation: Recommendation {
            impact: Impact::High,
            title: "You Start Engaged But Drift",
            advice: "You begin sessions asking good questions but gradually let Claude drive. Set a rule: every 3rd prompt should be a comprehension question.",
            action: None,
            source: SKILLS_STUDY,
            prompt: Some("Pause. Before we continue, explain what the last change you made actually does and why it works. I want to make sure I understand before moving on."),
        },
    },
    PatternRule {
        pattern: "iterative_ai_debugging",
        recommendation: Recommendation {
            impact: Impact::Medium,
            title: "Understand Before Debugging",
            advice: "Before asking Claude to fix a bug, explain what you think is wrong. 'I think the issue is X because Y' forces understanding.",
            action: None,
            source: SKILLS_STUDY,
            prompt: Some("I think the bug is caused by [describe your hypothesis]. Can you confirm whether I'm on the right track before fixing it? Explain what's actually happening."),
        },
    },
];

/// Links listed under every set of recommendations
pub const RESEARCH_SOURCES: [(&str, &str); 3] = [
    (
        "AI Fluency Index (Feb 23, 2026)",
        "https://www.anthropic.com/research/AI-fluency-index",
    ),
    (
        "Coding Skills Formation (Jan 29, 2026)",
        "https://www.anthropic.com/research/coding-skill-formation",
    ),
    (
        "Claude Code Best Practices",
        "https://www.anthropic.com/research/claude-code-best-practices",
    ),
];

/// A behavior the user already does often enough
#[derive(Clone, Debug, PartialEq)]
pub struct DoingWell {
    pub behavior: Behavior,
    pub pct: u32,
}

impl DoingWell {
    pub fn label(&self) -> String {
        format!("{} ({}%): above average", self.behavior.label(), self.pct)
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct RecommendationPlan {
    pub high: Vec<&'static Recommendation>,
    pub medium: Vec<&'static Recommendation>,
    pub doing_well: Vec<DoingWell>,
}

impl RecommendationPlan {
    fn push(&mut self, recommendation: &'static Recommendation) {
        match recommendation.impact {
            Impact::High => self.high.push(recommendation),
            Impact::Medium => self.medium.push(recommendation),
        }
    }

    fn push_doing_well(&mut self, behavior: Behavior, prevalence: f64) {
        if self.doing_well.iter().all(|d| d.behavior != behavior) {
            self.doing_well.push(DoingWell {
                behavior,
                pct: (prevalence * 100.0).round() as u32,
            });
        }
    }
}

pub fn recommend(aggregate: &Aggregate) -> RecommendationPlan {
    let mut plan = RecommendationPlan::default();

    for rule in &BEHAVIOR_RULES {
        let prevalence = aggregate.prevalence(rule.behavior.key());
        if prevalence < rule.threshold {
            plan.push(&rule.recommendation);
        } else {
            plan.push_doing_well(rule.behavior, prevalence);
        }
    }

    for rule in &PATTERN_RULES {
        let count = aggregate
            .pattern_distribution
            .get(rule.pattern)
            .copied()
            .unwrap_or(0);
        if count > 0 {
            plan.push(&rule.recommendation);
        }
    }

    for behavior in Behavior::ALL {
        let prevalence = aggregate.prevalence(behavior.key());
        if prevalence >= behavior.benchmark() {
            plan.push_doing_well(behavior, prevalence);
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(prevalence: &[(&str, f64)], patterns: &[(&str, u32)]) -> Aggregate {
        Aggregate {
            average_score: 60.0,
            sessions_scored: 5,
            behavior_prevalence: prevalence.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            pattern_distribution: patterns.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    #[test]
    fn test_low_fact_checking_is_high_impact() {
        let plan = recommend(&aggregate(&[("checking_facts", 0.10)], &[]));

        assert!(plan
            .high
            .iter()
            .any(|r| r.title == "Verify Claims After Code Generation"));
        assert!(plan
            .doing_well
            .iter()
            .all(|d| d.behavior != Behavior::CheckingFacts));
    }

    #[test]
    fn test_empty_prevalence_fires_every_behavior_rule() {
        let plan = recommend(&aggregate(&[], &[]));
        assert_eq!(plan.high.len(), 2);
        assert_eq!(plan.medium.len(), 3);
        assert!(plan.doing_well.is_empty());
    }

    #[test]
    fn test_pattern_rules_fire_on_presence() {
        let plan = recommend(&aggregate(
            &[],
            &[("ai_delegation", 1), ("iterative_ai_debugging", 2), ("progressive_ai_reliance", 0)],
        ));
        assert_eq!(plan.high.len(), 3);
        assert_eq!(plan.high[2].title, "You're Delegating Too Much");
        assert_eq!(plan.medium.len(), 4);
        assert_eq!(plan.medium[3].title, "Understand Before Debugging");
    }

    #[test]
    fn test_doing_well_without_duplicates() {
        let plan = recommend(&aggregate(
            &[
                ("setting_interaction_terms", 0.5),
                ("checking_facts", 0.3),
                ("clarifying_goals", 0.9),
                ("adjusting_approach", 0.1),
            ],
            &[],
        ));

        let names: Vec<_> = plan.doing_well.iter().map(|d| d.behavior).collect();
        // checking_facts clears the benchmark (0.25) but not its rule threshold (0.35)
        assert_eq!(
            names,
            vec![
                Behavior::SettingInteractionTerms,
                Behavior::ClarifyingGoals,
                Behavior::CheckingFacts
            ]
        );
        assert_eq!(plan.doing_well[0].label(), "Setting Interaction Terms (50%): above average");
        assert!(plan.high.iter().any(|r| r.title == "Verify Claims After Code Generation"));
    }
}
