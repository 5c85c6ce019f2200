//! Server Payloads
//!
//! Shapes returned by the CodeFluent API. Missing numbers default to 0 and
//! missing lists to empty so partial reports still render.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day of the ccusage daily report
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyUsage {
    pub date: String,
    pub total_tokens: f64,
    pub total_cost: f64,
    pub cache_read_tokens: f64,
    pub cache_creation_tokens: f64,
    pub input_tokens: f64,
    pub output_tokens: f64,
    pub models_used: Vec<String>,
    pub model_breakdowns: Vec<ModelBreakdown>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelBreakdown {
    pub model_name: String,
    pub cost: f64,
}

/// GET /api/usage
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UsageResponse {
    #[serde(default)]
    pub daily: Option<DailyReport>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct DailyReport {
    #[serde(default)]
    pub daily: Vec<DailyUsage>,
}

impl UsageResponse {
    pub fn into_daily(self) -> Vec<DailyUsage> {
        self.daily.map(|d| d.daily).unwrap_or_default()
    }
}

/// A scoreable conversation
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub project: String,
}

/// GET /api/sessions
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SessionsResponse {
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// Cross-session aggregate; the server sends `{}` when nothing was scored
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Aggregate {
    pub average_score: f64,
    pub sessions_scored: usize,
    pub behavior_prevalence: BTreeMap<String, f64>,
    pub pattern_distribution: BTreeMap<String, u32>,
}

impl Aggregate {
    /// Prevalence of a behavior key, 0 when absent
    pub fn prevalence(&self, key: &str) -> f64 {
        self.behavior_prevalence.get(key).copied().unwrap_or(0.0)
    }
}

/// Score of one session, or the reason it could not be scored
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionResult {
    pub overall_score: Option<f64>,
    pub one_line_summary: Option<String>,
    pub coding_pattern: Option<String>,
    pub error: Option<String>,
}

/// POST /api/score and GET /api/scores
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FluencyScore {
    pub aggregate: Aggregate,
    pub scores: BTreeMap<String, SessionResult>,
}

impl FluencyScore {
    pub fn has_scored_sessions(&self) -> bool {
        self.aggregate.sessions_scored > 0
    }
}

/// Body of POST /api/score
#[derive(Debug, Serialize)]
pub struct ScoreRequest {
    pub session_ids: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct QuickWin {
    #[serde(default)]
    pub task: String,
    #[serde(default)]
    pub repo: String,
    #[serde(default)]
    pub estimated_minutes: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub prompt: String,
}

/// GET /api/quickwins
#[derive(Clone, Debug, Default, Deserialize)]
pub struct QuickWinsResponse {
    #[serde(default)]
    pub suggestions: Vec<QuickWin>,
    #[serde(default)]
    pub error: Option<String>,
}
