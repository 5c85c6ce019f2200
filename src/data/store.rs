//! Data Directory Store
//!
//! Reads the ccusage exports and extracted sessions, and persists the
//! score cache. Layout under the data root:
//!
//! ```text
//! ccusage/daily.json
//! ccusage/monthly.json
//! ccusage/session.json
//! prompts/sessions.json
//! scores.json
//! quickwins.json
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::error::{DataError, DataResult};
use super::types::{QuickWin, ScoreCache, SessionsFile};

/// ccusage report names served by `/api/usage`
pub const USAGE_REPORTS: [&str; 3] = ["daily", "monthly", "session"];

/// Handle on the data directory
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn usage_path(&self, report: &str) -> PathBuf {
        self.root.join("ccusage").join(format!("{}.json", report))
    }

    pub fn sessions_path(&self) -> PathBuf {
        self.root.join("prompts").join("sessions.json")
    }

    pub fn scores_path(&self) -> PathBuf {
        self.root.join("scores.json")
    }

    pub fn quickwins_path(&self) -> PathBuf {
        self.root.join("quickwins.json")
    }

    /// Every ccusage report present on disk, keyed by report name
    pub async fn load_usage(&self) -> DataResult<serde_json::Map<String, serde_json::Value>> {
        let mut reports = serde_json::Map::new();
        for name in USAGE_REPORTS {
            if let Some(report) = read_json(&self.usage_path(name)).await? {
                reports.insert(name.to_string(), report);
            }
        }
        Ok(reports)
    }

    /// Extracted sessions, `None` if the extractor has not run yet
    pub async fn load_sessions(&self) -> DataResult<Option<SessionsFile>> {
        read_json(&self.sessions_path()).await
    }

    /// Score cache, empty if nothing has been scored yet
    pub async fn load_scores(&self) -> DataResult<ScoreCache> {
        Ok(read_json(&self.scores_path()).await?.unwrap_or_default())
    }

    pub async fn save_scores(&self, cache: &ScoreCache) -> DataResult<()> {
        write_json(&self.scores_path(), cache).await
    }

    /// Pre-generated quick wins, `None` if the file is absent
    pub async fn load_quickwins(&self) -> DataResult<Option<Vec<QuickWin>>> {
        read_json(&self.quickwins_path()).await
    }
}

/// Read and decode a JSON file; a missing file is `Ok(None)`
async fn read_json<T: DeserializeOwned>(path: &Path) -> DataResult<Option<T>> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(DataError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| DataError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Write pretty JSON via a temp file and rename
async fn write_json<T: Serialize>(path: &Path, value: &T) -> DataResult<()> {
    let io_err = |source| DataError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }

    let body = serde_json::to_vec_pretty(value).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, body).await.map_err(io_err)?;
    tokio::fs::rename(&tmp, path).await.map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::SessionScore;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_missing_files_are_empty() {
        let dir = tempdir().unwrap();
        let store = DataStore::new(dir.path());

        assert!(store.load_usage().await.unwrap().is_empty());
        assert!(store.load_sessions().await.unwrap().is_none());
        assert!(store.load_scores().await.unwrap().is_empty());
        assert!(store.load_quickwins().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_usage_only_present_reports() {
        let dir = tempdir().unwrap();
        let store = DataStore::new(dir.path());
        std::fs::create_dir_all(dir.path().join("ccusage")).unwrap();
        std::fs::write(store.usage_path("daily"), r#"{"daily": []}"#).unwrap();

        let usage = store.load_usage().await.unwrap();
        assert_eq!(usage.len(), 1);
        assert!(usage["daily"]["daily"].is_array());
        assert!(!usage.contains_key("monthly"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_reported() {
        let dir = tempdir().unwrap();
        let store = DataStore::new(dir.path());
        std::fs::write(store.scores_path(), "{not json").unwrap();

        let err = store.load_scores().await.unwrap_err();
        assert!(matches!(err, DataError::Json { .. }));
    }

    #[tokio::test]
    async fn test_scores_roundtrip_creates_dir() {
        let dir = tempdir().unwrap();
        let store = DataStore::new(dir.path().join("nested"));

        let mut cache = ScoreCache::new();
        cache.insert("s1".to_string(), SessionScore::failed("s1", "boom"));
        store.save_scores(&cache).await.unwrap();

        let loaded = store.load_scores().await.unwrap();
        assert_eq!(loaded, cache);
        assert!(!store.scores_path().with_extension("json.tmp").exists());
    }
}
