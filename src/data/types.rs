//! On-disk record types
//!
//! Shapes of `prompts/sessions.json`, `scores.json` and `quickwins.json`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One Claude Code conversation with the user prompts pulled out of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub project: String,
    #[serde(default)]
    pub project_path_encoded: String,
    #[serde(default)]
    pub started_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
    #[serde(default)]
    pub user_prompts: Vec<String>,
    #[serde(default)]
    pub user_message_count: usize,
    #[serde(default)]
    pub assistant_message_count: usize,
    #[serde(default)]
    pub tool_use_count: usize,
    #[serde(default)]
    pub tools_used: Vec<String>,
    #[serde(default)]
    pub thinking_count: usize,
    #[serde(default)]
    pub used_plan_mode: bool,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub claude_code_version: Option<String>,
    #[serde(default)]
    pub git_branch: Option<String>,
}

/// Summary written alongside the extracted sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionsMetadata {
    pub total_sessions: usize,
    pub total_projects: usize,
    pub total_prompts: usize,
    pub extracted_at: String,
}

/// Contents of `prompts/sessions.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionsFile {
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub metadata: Option<SessionsMetadata>,
}

/// Score for one session as returned by the external scorer.
///
/// Fields the dashboard does not read are preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionScore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluency_behaviors: Option<BTreeMap<String, bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coding_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coding_pattern_quality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_line_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionScore {
    /// Entry recording a failed scoring attempt
    pub fn failed(session_id: &str, error: impl Into<String>) -> Self {
        Self {
            session_id: Some(session_id.to_string()),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Whether this entry carries a behavior assessment
    pub fn is_scored(&self) -> bool {
        self.fluency_behaviors.is_some()
    }
}

/// Contents of `scores.json`, keyed by session id
pub type ScoreCache = BTreeMap<String, SessionScore>;

/// A short task suggested to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickWin {
    pub repo: String,
    pub task: String,
    pub prompt: String,
    #[serde(default)]
    pub estimated_minutes: u32,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "feature".to_string()
}
