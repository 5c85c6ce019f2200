//! Transcript Parser
//!
//! Turns one Claude Code JSONL transcript into a [`SessionRecord`].

use serde_json::Value;
use std::collections::BTreeSet;

use crate::data::SessionRecord;

/// Line types carrying nothing the scorer needs
const SKIP_TYPES: [&str; 7] = [
    "file-history-snapshot",
    "tool_result",
    "progress",
    "hook_progress",
    "bash_progress",
    "system",
    "create",
];

const INTERRUPTED_MARKER: &str = "[Request interrupted by user for tool use]";

/// Prompts longer than this are cut
pub const MAX_PROMPT_CHARS: usize = 2000;

/// Text of a user message whose content is a string or a list of blocks
pub fn extract_user_text(content: &Value) -> String {
    match content {
        Value::String(s) => s.trim().to_string(),
        Value::Array(blocks) => blocks
            .iter()
            .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
            .filter_map(|b| b.get("text").and_then(Value::as_str))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}

/// Parse transcript text.
///
/// `fallback_id` is used when no line carries a `sessionId` and
/// `fallback_project` when no line carries a `cwd`. Returns `None` for
/// transcripts without a single usable user prompt.
pub fn parse_transcript(content: &str, fallback_id: &str, fallback_project: &str) -> Option<SessionRecord> {
    let mut session = TranscriptState::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Partially written lines are common in live transcripts
        if let Ok(msg) = serde_json::from_str::<Value>(line) {
            session.observe(&msg);
        }
    }

    session.finish(fallback_id, fallback_project)
}

#[derive(Default)]
struct TranscriptState {
    session_id: Option<String>,
    cwd: Option<String>,
    version: Option<String>,
    git_branch: Option<String>,
    model: Option<String>,
    timestamps: Vec<String>,
    user_prompts: Vec<String>,
    tools_used: BTreeSet<String>,
    user_msg_count: usize,
    assistant_msg_count: usize,
    tool_use_count: usize,
    thinking_count: usize,
    used_plan_mode: bool,
}

impl TranscriptState {
    fn observe(&mut self, msg: &Value) {
        let msg_type = msg.get("type").and_then(Value::as_str).unwrap_or("");
        if SKIP_TYPES.contains(&msg_type) {
            return;
        }

        keep_first(&mut self.session_id, msg, "sessionId");
        keep_first(&mut self.cwd, msg, "cwd");
        keep_first(&mut self.version, msg, "version");
        keep_first(&mut self.git_branch, msg, "gitBranch");

        if let Some(ts) = msg.get("timestamp").and_then(Value::as_str) {
            self.timestamps.push(ts.to_string());
        }

        match msg_type {
            "user" => self.observe_user(msg),
            "assistant" => self.observe_assistant(msg),
            "tool_use" => self.observe_tool_use(msg),
            "thinking" => self.thinking_count += 1,
            _ => {}
        }
    }

    fn observe_user(&mut self, msg: &Value) {
        self.user_msg_count += 1;

        let content = msg.pointer("/message/content").unwrap_or(&Value::Null);
        let text = extract_user_text(content);
        if !text.is_empty() && text != INTERRUPTED_MARKER {
            self.user_prompts.push(truncate_chars(&text, MAX_PROMPT_CHARS));
        }

        if msg.get("planContent").map(is_truthy).unwrap_or(false) {
            self.used_plan_mode = true;
        }
    }

    fn observe_assistant(&mut self, msg: &Value) {
        self.assistant_msg_count += 1;

        if self.model.is_none() {
            if let Some(model) = msg.pointer("/message/model").and_then(Value::as_str) {
                if !model.is_empty() {
                    self.model = Some(model.to_string());
                }
            }
        }

        for block in tool_use_blocks(msg) {
            self.tool_use_count += 1;
            if let Some(name) = block_name(block) {
                self.tools_used.insert(name.to_string());
            }
        }
    }

    fn observe_tool_use(&mut self, msg: &Value) {
        self.tool_use_count += 1;

        let name = block_name(msg)
            .or_else(|| msg.get("message").and_then(block_name))
            .or_else(|| tool_use_blocks(msg).next().and_then(block_name));

        if let Some(name) = name {
            self.tools_used.insert(name.to_string());
        }
    }

    fn finish(mut self, fallback_id: &str, fallback_project: &str) -> Option<SessionRecord> {
        if self.user_prompts.is_empty() {
            return None;
        }

        let project = self
            .cwd
            .as_deref()
            .and_then(|cwd| cwd.trim_end_matches('/').rsplit('/').next())
            .filter(|name| !name.is_empty())
            .unwrap_or(fallback_project)
            .to_string();

        self.timestamps.sort();

        Some(SessionRecord {
            id: self.session_id.unwrap_or_else(|| fallback_id.to_string()),
            project,
            project_path_encoded: fallback_project.to_string(),
            started_at: self.timestamps.first().cloned(),
            ended_at: self.timestamps.last().cloned(),
            user_message_count: self.user_msg_count,
            assistant_message_count: self.assistant_msg_count,
            tool_use_count: self.tool_use_count,
            tools_used: self.tools_used.into_iter().collect(),
            thinking_count: self.thinking_count,
            used_plan_mode: self.used_plan_mode,
            model: self.model,
            claude_code_version: self.version,
            git_branch: self.git_branch,
            user_prompts: self.user_prompts,
        })
    }
}

fn keep_first(slot: &mut Option<String>, msg: &Value, key: &str) {
    if slot.is_none() {
        if let Some(value) = msg.get(key).and_then(Value::as_str) {
            if !value.is_empty() {
                *slot = Some(value.to_string());
            }
        }
    }
}

fn tool_use_blocks(msg: &Value) -> impl Iterator<Item = &Value> {
    msg.pointer("/message/content")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter(|b| b.get("type").and_then(Value::as_str) == Some("tool_use"))
}

fn block_name(value: &Value) -> Option<&str> {
    value
        .get("name")
        .and_then(Value::as_str)
        .filter(|n| !n.is_empty())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}

fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
