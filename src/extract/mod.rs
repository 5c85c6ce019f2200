//! Session Extraction
//!
//! Walks the Claude Code projects directory and collects the user prompts
//! of every session transcript into `prompts/sessions.json`.

pub mod parser;

pub use parser::{extract_user_text, parse_transcript, MAX_PROMPT_CHARS};

use chrono::Local;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::{SessionRecord, SessionsFile, SessionsMetadata};

/// Errors raised while extracting sessions
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Claude data directory not found: {0}")]
    MissingRoot(PathBuf),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode sessions: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> ExtractError + '_ {
    move |source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Extract every session under `root`, newest first.
///
/// Each immediate subdirectory is one project; each `*.jsonl` file in it is
/// one session. Unreadable transcripts are logged and skipped.
pub fn extract_sessions(root: &Path, limit: Option<usize>) -> ExtractResult<SessionsFile> {
    if !root.is_dir() {
        return Err(ExtractError::MissingRoot(root.to_path_buf()));
    }

    let mut sessions = Vec::new();

    for project_dir in sorted_entries(root)? {
        if !project_dir.is_dir() {
            continue;
        }
        let project_name = file_name(&project_dir);

        for transcript in sorted_entries(&project_dir)? {
            if transcript.extension().and_then(|e| e.to_str()) != Some("jsonl") {
                continue;
            }

            let bytes = match fs::read(&transcript) {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(path = %transcript.display(), error = %e, "Skipping unreadable transcript");
                    continue;
                }
            };
            let content = String::from_utf8_lossy(&bytes);
            let stem = transcript
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();

            if let Some(session) = parse_transcript(&content, stem, &project_name) {
                sessions.push(session);
            }
        }
    }

    // Sessions without a start time sort last
    sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));

    if let Some(limit) = limit {
        sessions.truncate(limit);
    }

    let metadata = summarize(&sessions);
    tracing::info!(
        sessions = metadata.total_sessions,
        projects = metadata.total_projects,
        prompts = metadata.total_prompts,
        "Extraction complete"
    );

    Ok(SessionsFile {
        sessions,
        metadata: Some(metadata),
    })
}

/// Write `sessions.json` into `output_dir`, returning its path
pub fn write_sessions(output_dir: &Path, file: &SessionsFile) -> ExtractResult<PathBuf> {
    fs::create_dir_all(output_dir).map_err(io_err(output_dir))?;

    let path = output_dir.join("sessions.json");
    let json = serde_json::to_vec_pretty(file)?;
    fs::write(&path, json).map_err(io_err(&path))?;

    Ok(path)
}

fn summarize(sessions: &[SessionRecord]) -> SessionsMetadata {
    let projects: BTreeSet<&str> = sessions.iter().map(|s| s.project.as_str()).collect();

    SessionsMetadata {
        total_sessions: sessions.len(),
        total_projects: projects.len(),
        total_prompts: sessions.iter().map(|s| s.user_prompts.len()).sum(),
        extracted_at: Local::now().to_rfc3339(),
    }
}

fn sorted_entries(dir: &Path) -> ExtractResult<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .map_err(io_err(dir))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect::<Vec<_>>();
    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
