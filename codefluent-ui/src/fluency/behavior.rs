//! Fluency Behaviors
//!
//! The eleven behaviors of the AI Fluency Index with their published
//! prevalence benchmarks.

use super::Tone;
use crate::model::Aggregate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Behavior {
    IterationAndRefinement,
    BuildingOnResponses,
    ClarifyingGoals,
    AdjustingApproach,
    QuestioningReasoning,
    ProvidingFeedback,
    SpecifyingFormat,
    SettingInteractionTerms,
    CheckingFacts,
    ProvidingExamples,
    IdentifyingMissingContext,
}

impl Behavior {
    /// Benchmark order, most to least common
    pub const ALL: [Behavior; 11] = [
        Behavior::IterationAndRefinement,
        Behavior::BuildingOnResponses,
        Behavior::ClarifyingGoals,
        Behavior::AdjustingApproach,
        Behavior::QuestioningReasoning,
        Behavior::ProvidingFeedback,
        Behavior::SpecifyingFormat,
        Behavior::SettingInteractionTerms,
        Behavior::CheckingFacts,
        Behavior::ProvidingExamples,
        Behavior::IdentifyingMissingContext,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Behavior::IterationAndRefinement => "iteration_and_refinement",
            Behavior::BuildingOnResponses => "building_on_responses",
            Behavior::ClarifyingGoals => "clarifying_goals",
            Behavior::AdjustingApproach => "adjusting_approach",
            Behavior::QuestioningReasoning => "questioning_reasoning",
            Behavior::ProvidingFeedback => "providing_feedback",
            Behavior::SpecifyingFormat => "specifying_format",
            Behavior::SettingInteractionTerms => "setting_interaction_terms",
            Behavior::CheckingFacts => "checking_facts",
            Behavior::ProvidingExamples => "providing_examples",
            Behavior::IdentifyingMissingContext => "identifying_missing_context",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == key)
    }

    /// Share of conversations showing the behavior in the Fluency Index
    pub fn benchmark(self) -> f64 {
        match self {
            Behavior::IterationAndRefinement => 0.857,
            Behavior::BuildingOnResponses => 0.75,
            Behavior::ClarifyingGoals => 0.70,
            Behavior::AdjustingApproach => 0.60,
            Behavior::QuestioningReasoning => 0.40,
            Behavior::ProvidingFeedback => 0.35,
            Behavior::SpecifyingFormat => 0.30,
            Behavior::SettingInteractionTerms => 0.30,
            Behavior::CheckingFacts => 0.25,
            Behavior::ProvidingExamples => 0.25,
            Behavior::IdentifyingMissingContext => 0.20,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Behavior::IterationAndRefinement => "Iteration & Refinement",
            Behavior::BuildingOnResponses => "Building on Responses",
            Behavior::ClarifyingGoals => "Clarifying Goals",
            Behavior::AdjustingApproach => "Adjusting Approach",
            Behavior::QuestioningReasoning => "Questioning Reasoning",
            Behavior::ProvidingFeedback => "Providing Feedback",
            Behavior::SpecifyingFormat => "Specifying Format",
            Behavior::SettingInteractionTerms => "Setting Interaction Terms",
            Behavior::CheckingFacts => "Checking Facts",
            Behavior::ProvidingExamples => "Providing Examples",
            Behavior::IdentifyingMissingContext => "Identifying Missing Context",
        }
    }

    /// Tooltip text
    pub fn description(self) -> &'static str {
        match self {
            Behavior::IterationAndRefinement => "Builds on Claude's responses by refining requests rather than accepting the first answer. Indicates deeper engagement with AI output.",
            Behavior::BuildingOnResponses => "Uses Claude's output as a foundation for further work: extending, combining, or adapting what was generated.",
            Behavior::ClarifyingGoals => "Clearly states what they're trying to accomplish before or during the interaction, giving Claude better context.",
            Behavior::AdjustingApproach => "Changes strategy mid-conversation based on Claude's responses, pivoting when something isn't working.",
            Behavior::QuestioningReasoning => "Asks Claude to explain its rationale: \"Why this approach?\" or \"What are the trade-offs?\" Drives deeper understanding.",
            Behavior::ProvidingFeedback => "Gives explicit feedback on response quality: \"That's not quite right\" or \"Good, but simplify it.\" Helps steer the conversation.",
            Behavior::SpecifyingFormat => "Tells Claude how to structure output: \"Use bullet points\", \"Show me a table\", \"Keep it under 5 lines.\"",
            Behavior::SettingInteractionTerms => "Defines how Claude should behave: \"Push back if my approach is wrong\", \"Explain your uncertainty.\" Only ~30% of users do this.",
            Behavior::CheckingFacts => "Verifies or questions factual claims in Claude's output: \"Are you sure this API exists?\" Guards against hallucination.",
            Behavior::ProvidingExamples => "Shows Claude examples of desired output: \"Follow this pattern\" or pasting a code snippet. Dramatically improves quality.",
            Behavior::IdentifyingMissingContext => "Spots gaps in Claude's knowledge: \"What assumptions are you making?\" or \"What context would help you here?\"",
        }
    }

    /// Bar colour for a user prevalence: red when more than 15 points under
    /// the benchmark, amber when under it, green at or above
    pub fn standing(self, prevalence: f64) -> Tone {
        let user_pct = prevalence * 100.0;
        let bench_pct = self.benchmark() * 100.0;

        if user_pct < bench_pct - 15.0 {
            Tone::Danger
        } else if user_pct < bench_pct {
            Tone::Warning
        } else {
            Tone::Success
        }
    }
}

/// One row of the behaviors-vs-benchmark chart
#[derive(Clone, Debug, PartialEq)]
pub struct BehaviorBar {
    pub behavior: Behavior,
    pub user_pct: f64,
    pub bench_pct: f64,
    pub tone: Tone,
}

impl BehaviorBar {
    pub fn pct_label(&self) -> String {
        format!("{}%", self.user_pct.round() as i64)
    }

    pub fn benchmark_title(&self) -> String {
        format!("Anthropic avg: {:.1}%", self.bench_pct)
    }
}

pub fn behavior_bars(aggregate: &Aggregate) -> Vec<BehaviorBar> {
    Behavior::ALL
        .into_iter()
        .map(|behavior| {
            let prevalence = aggregate.prevalence(behavior.key());
            BehaviorBar {
                behavior,
                user_pct: prevalence * 100.0,
                bench_pct: behavior.benchmark() * 100.0,
                tone: behavior.standing(prevalence),
            }
        })
        .collect()
}
