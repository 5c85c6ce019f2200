//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::data::{QuickWin, SessionRecord, SessionScore};
use crate::scoring::{aggregate_json, ScoreBatch};

// ============================================
// SESSION DTOs
// ============================================

fn default_limit() -> usize {
    50
}

/// Query string for GET /api/sessions
#[derive(Debug, Deserialize)]
pub struct SessionsQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Exact project name filter
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionsResponse {
    pub sessions: Vec<SessionRecord>,
    /// Extraction summary, `{}` when nothing was extracted
    pub metadata: Value,
}

// ============================================
// SCORING DTOs
// ============================================

/// Body of POST /api/score
#[derive(Debug, Deserialize)]
pub struct ScoreRequestBody {
    pub session_ids: Vec<String>,
    #[serde(default)]
    pub force_rescore: bool,
}

/// Scores keyed by session id plus the aggregate, `{}` when nothing scored
#[derive(Debug, Serialize)]
pub struct ScoresResponse {
    pub scores: BTreeMap<String, SessionScore>,
    pub aggregate: Value,
}

impl From<ScoreBatch> for ScoresResponse {
    fn from(batch: ScoreBatch) -> Self {
        Self {
            aggregate: aggregate_json(batch.aggregate.as_ref()),
            scores: batch.scores,
        }
    }
}

// ============================================
// QUICK WIN DTOs
// ============================================

#[derive(Debug, Serialize)]
pub struct QuickWinsResponse {
    pub suggestions: Vec<QuickWin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================
// USAGE / HEALTH DTOs
// ============================================

/// Reports keyed by name, only those present on disk
pub type UsageResponse = Map<String, Value>;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub data_dir: String,
    pub sessions_extracted: bool,
    pub uptime_seconds: u64,
    pub version: String,
}
