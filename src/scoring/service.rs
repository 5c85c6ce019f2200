//! Scoring Service
//!
//! Resolves scoring requests against the score cache, sending only
//! uncached sessions to the external scorer.

use std::collections::{BTreeMap, HashMap};
use tokio::sync::Mutex;

use super::aggregate::{compute_aggregate, Aggregate};
use super::scorer::{ScoreRequest, SessionScorer};
use super::{ScoringError, ScoringResult};
use crate::data::{DataStore, ScoreCache, SessionRecord, SessionScore};

/// Result of a scoring batch or a cache read
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBatch {
    pub scores: BTreeMap<String, SessionScore>,
    pub aggregate: Option<Aggregate>,
}

pub struct ScoringService {
    store: DataStore,
    scorer: Box<dyn SessionScorer>,
    max_prompts: usize,
    /// Serializes read-modify-write cycles on the cache file
    cache_lock: Mutex<()>,
}

impl ScoringService {
    pub fn new(store: DataStore, scorer: Box<dyn SessionScorer>, max_prompts: usize) -> Self {
        Self {
            store,
            scorer,
            max_prompts,
            cache_lock: Mutex::new(()),
        }
    }

    /// Everything cached so far, aggregated over the scored entries
    pub async fn cached(&self) -> ScoringResult<ScoreBatch> {
        let scores = self.store.load_scores().await?;
        let aggregate = compute_aggregate(scores.values());
        Ok(ScoreBatch { scores, aggregate })
    }

    /// Score the given sessions, reusing cached results unless `force`.
    ///
    /// Unknown ids and sessions without prompts are skipped. Scorer
    /// failures become error entries and are not cached.
    pub async fn score_sessions(&self, session_ids: &[String], force: bool) -> ScoringResult<ScoreBatch> {
        let sessions = self
            .store
            .load_sessions()
            .await?
            .ok_or(ScoringError::NoSessions)?;
        let by_id: HashMap<&str, &SessionRecord> =
            sessions.sessions.iter().map(|s| (s.id.as_str(), s)).collect();

        let _guard = self.cache_lock.lock().await;
        let mut cache: ScoreCache = self.store.load_scores().await?;
        let mut results = BTreeMap::new();
        let mut fresh = 0usize;

        for sid in session_ids {
            if !force {
                if let Some(cached) = cache.get(sid) {
                    results.insert(sid.clone(), cached.clone());
                    continue;
                }
            }

            let session = match by_id.get(sid.as_str()) {
                Some(session) if !session.user_prompts.is_empty() => *session,
                _ => {
                    tracing::debug!(session_id = %sid, "Skipping unknown or empty session");
                    continue;
                }
            };

            let request = ScoreRequest::from_session(session, self.max_prompts);
            match self.scorer.score(&request).await {
                Ok(mut score) => {
                    score.session_id = Some(sid.clone());
                    cache.insert(sid.clone(), score.clone());
                    results.insert(sid.clone(), score);
                    fresh += 1;
                }
                Err(e) => {
                    tracing::warn!(session_id = %sid, error = %e, "Session scoring failed");
                    results.insert(sid.clone(), SessionScore::failed(sid, e.to_string()));
                }
            }
        }

        self.store.save_scores(&cache).await?;

        tracing::info!(
            requested = session_ids.len(),
            returned = results.len(),
            fresh,
            "Scoring batch complete"
        );

        let aggregate = compute_aggregate(results.values());
        Ok(ScoreBatch {
            scores: results,
            aggregate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SessionsFile;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::{tempdir, TempDir};

    /// Scores every session 70, except ids starting with "bad"
    struct FakeScorer {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl SessionScorer for FakeScorer {
        async fn score(&self, request: &ScoreRequest) -> Result<SessionScore, ScoringError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if request.session_id.starts_with("bad") {
                return Err(ScoringError::Unavailable);
            }
            Ok(SessionScore {
                fluency_behaviors: Some([("checking_facts".to_string(), true)].into_iter().collect()),
                coding_pattern: Some("conceptual_inquiry".to_string()),
                overall_score: Some(70.0),
                one_line_summary: Some(format!("{} prompts", request.prompts.len())),
                ..Default::default()
            })
        }
    }

    fn session(id: &str, prompts: usize) -> SessionRecord {
        SessionRecord {
            id: id.to_string(),
            project: "cf".to_string(),
            project_path_encoded: String::new(),
            started_at: None,
            ended_at: None,
            user_prompts: (0..prompts).map(|i| format!("p{}", i)).collect(),
            user_message_count: prompts,
            assistant_message_count: 0,
            tool_use_count: 0,
            tools_used: Vec::new(),
            thinking_count: 0,
            used_plan_mode: false,
            model: None,
            claude_code_version: None,
            git_branch: None,
        }
    }

    async fn setup(sessions: Vec<SessionRecord>) -> (ScoringService, Arc<AtomicUsize>, TempDir) {
        let dir = tempdir().unwrap();
        let store = DataStore::new(dir.path());
        std::fs::create_dir_all(dir.path().join("prompts")).unwrap();
        let file = SessionsFile {
            sessions,
            metadata: None,
        };
        std::fs::write(store.sessions_path(), serde_json::to_vec(&file).unwrap()).unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let scorer = FakeScorer {
            calls: Arc::clone(&calls),
        };
        (ScoringService::new(store, Box::new(scorer), 20), calls, dir)
    }

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_scores_and_caches() {
        let (service, calls, _dir) = setup(vec![session("a", 3), session("b", 25)]).await;

        let batch = service.score_sessions(&ids(&["a", "b"]), false).await.unwrap();
        assert_eq!(batch.scores.len(), 2);
        assert_eq!(batch.scores["b"].one_line_summary.as_deref(), Some("20 prompts"));
        assert_eq!(batch.scores["a"].session_id.as_deref(), Some("a"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let agg = batch.aggregate.unwrap();
        assert_eq!(agg.sessions_scored, 2);
        assert_eq!(agg.average_score, 70);

        // Second run is served from the cache
        service.score_sessions(&ids(&["a", "b"]), false).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        // Forced run goes back to the scorer
        service.score_sessions(&ids(&["a"]), true).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_skips_unknown_and_empty() {
        let (service, calls, _dir) = setup(vec![session("empty", 0)]).await;

        let batch = service.score_sessions(&ids(&["missing", "empty"]), false).await.unwrap();
        assert!(batch.scores.is_empty());
        assert!(batch.aggregate.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_failures_reported_not_cached() {
        let (service, _calls, _dir) = setup(vec![session("bad1", 2), session("ok", 2)]).await;

        let batch = service.score_sessions(&ids(&["bad1", "ok"]), false).await.unwrap();
        assert!(batch.scores["bad1"].error.is_some());
        assert_eq!(batch.aggregate.unwrap().sessions_scored, 1);

        let cached = service.cached().await.unwrap();
        assert!(cached.scores.contains_key("ok"));
        assert!(!cached.scores.contains_key("bad1"));
        assert_eq!(cached.aggregate.unwrap().sessions_scored, 1);
    }

    #[tokio::test]
    async fn test_missing_sessions_file() {
        let dir = tempdir().unwrap();
        let service = ScoringService::new(
            DataStore::new(dir.path()),
            Box::new(FakeScorer {
                calls: Arc::new(AtomicUsize::new(0)),
            }),
            20,
        );

        let err = service.score_sessions(&ids(&["a"]), false).await.unwrap_err();
        assert!(matches!(err, ScoringError::NoSessions));
    }
}
