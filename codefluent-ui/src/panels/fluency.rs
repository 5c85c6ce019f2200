//! Fluency Panel Model

use std::f64::consts::PI;

use crate::charts::{AxisFormat, ChartKind, ChartSpec, Series};
use crate::fluency::{PatternBreakdown, Pattern, Tone, PATTERN_COLORS};
use crate::format::format_date;
use crate::model::{FluencyScore, Session};

/// Choices offered by the session-count picker
pub const SESSION_COUNTS: [usize; 4] = [5, 10, 20, 50];
pub const DEFAULT_SESSION_COUNT: usize = 10;

pub const LOADING_TEXT: &str = "Analyzing sessions with Claude...";
pub const NO_SCORES_TEXT: &str = "No sessions could be scored.";

pub fn error_text(message: &str) -> String {
    format!("Error: {}", message)
}

/// SVG ring geometry for a 0-100 score
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gauge {
    pub score: f64,
    pub circumference: f64,
    pub offset: f64,
    pub tone: Tone,
}

impl Gauge {
    pub const RADIUS: f64 = 52.0;

    pub fn new(score: f64) -> Self {
        let circumference = 2.0 * PI * Self::RADIUS;
        Self {
            score,
            circumference,
            offset: circumference * (1.0 - score / 100.0),
            tone: Tone::for_score(score),
        }
    }

    pub fn score_label(&self) -> String {
        format!("{}", self.score.round() as i64)
    }
}

/// Ids of the first `count` sessions in list order
pub fn scoring_ids(sessions: &[Session], count: usize) -> Vec<String> {
    sessions.iter().take(count).map(|s| s.id.clone()).collect()
}

/// One entry of the session breakdown list
#[derive(Clone, Debug, PartialEq)]
pub struct SessionRow {
    pub id: String,
    pub heading: String,
    pub score: f64,
    pub tone: Tone,
    pub summary: String,
    pub pattern: String,
}

impl SessionRow {
    pub fn score_label(&self) -> String {
        format!("{}/100", self.score.round() as i64)
    }
}

/// Scored sessions in session-list order, then any ids the list does not
/// know about. Entries with an error are left out.
pub fn session_rows(score: &FluencyScore, sessions: &[Session]) -> Vec<SessionRow> {
    let listed = sessions.iter().filter_map(|s| {
        score.scores.get(&s.id).map(|result| (s.id.as_str(), result, Some(s)))
    });
    let unlisted = score
        .scores
        .iter()
        .filter(|(id, _)| !sessions.iter().any(|s| &s.id == *id))
        .map(|(id, result)| (id.as_str(), result, None));

    listed
        .chain(unlisted)
        .filter(|(_, result, _)| result.error.is_none())
        .map(|(id, result, session)| {
            let score = result.overall_score.unwrap_or(0.0);
            let date = session
                .and_then(|s| s.started_at.as_deref())
                .map(format_date)
                .unwrap_or_default();
            let project = session.map(|s| s.project.as_str()).unwrap_or("");
            SessionRow {
                id: id.to_string(),
                heading: format!("{} ({})", project, date),
                score,
                tone: Tone::for_score(score),
                summary: result.one_line_summary.clone().unwrap_or_default(),
                pattern: result
                    .coding_pattern
                    .as_deref()
                    .map(|p| Pattern::from_key(p).label().to_string())
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// Doughnut of the pattern distribution; `None` when there is nothing to draw
pub fn pattern_chart(breakdown: &PatternBreakdown) -> Option<ChartSpec> {
    if breakdown.shares.is_empty() {
        return None;
    }
    Some(ChartSpec {
        kind: ChartKind::Doughnut,
        labels: breakdown
            .shares
            .iter()
            .map(|s| s.pattern.label().to_string())
            .collect(),
        series: vec![Series {
            label: "Sessions".to_string(),
            values: breakdown.shares.iter().map(|s| s.count as f64).collect(),
            color: String::new(),
            fill: String::new(),
        }],
        y_format: AxisFormat::None,
        segment_colors: (0..breakdown.shares.len())
            .map(|i| PATTERN_COLORS[i % PATTERN_COLORS.len()].to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fluency::pattern_breakdown;
    use crate::model::SessionResult;

    fn session(id: &str, project: &str) -> Session {
        Session {
            id: id.to_string(),
            started_at: Some("2026-02-03T10:00:00Z".to_string()),
            project: project.to_string(),
        }
    }

    fn result(score: f64, pattern: &str) -> SessionResult {
        SessionResult {
            overall_score: Some(score),
            one_line_summary: Some("Solid iteration".to_string()),
            coding_pattern: Some(pattern.to_string()),
            error: None,
        }
    }

    #[test]
    fn test_gauge() {
        let full = Gauge::new(100.0);
        assert_eq!(full.offset, 0.0);
        assert_eq!(full.tone, Tone::Success);

        let half = Gauge::new(50.0);
        assert!((half.offset - PI * 52.0).abs() < 1e-9);
        assert_eq!(half.tone, Tone::Warning);

        assert_eq!(Gauge::new(31.0).tone, Tone::Danger);
        assert_eq!(Gauge::new(72.4).score_label(), "72");
    }

    #[test]
    fn test_scoring_ids_take_first_n() {
        let sessions: Vec<_> = (0..12).map(|i| session(&format!("s{}", i), "p")).collect();
        let ids = scoring_ids(&sessions, DEFAULT_SESSION_COUNT);
        assert_eq!(ids.len(), 10);
        assert_eq!(ids[0], "s0");
        assert_eq!(scoring_ids(&sessions, 50).len(), 12);
    }

    #[test]
    fn test_session_rows_follow_list_and_skip_errors() {
        let sessions = vec![session("b", "beta"), session("a", "alpha"), session("c", "gamma")];
        let mut score = FluencyScore::default();
        score.scores.insert("a".into(), result(45.0, "ai_delegation"));
        score.scores.insert("b".into(), result(80.0, "conceptual_inquiry"));
        score.scores.insert(
            "c".into(),
            SessionResult {
                error: Some("timeout".into()),
                ..Default::default()
            },
        );
        score.scores.insert("z".into(), result(60.0, "mystery"));

        let rows = session_rows(&score, &sessions);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "z"]);

        assert_eq!(rows[0].heading, "beta (Feb 03, 2026)");
        assert_eq!(rows[0].score_label(), "80/100");
        assert_eq!(rows[0].tone, Tone::Success);
        assert_eq!(rows[0].pattern, "Conceptual Inquiry");
        assert_eq!(rows[1].tone, Tone::Danger);
        assert_eq!(rows[2].heading, " ()");
        assert_eq!(rows[2].pattern, "mystery");
    }

    #[test]
    fn test_pattern_chart() {
        let mut dist = std::collections::BTreeMap::new();
        dist.insert("ai_delegation".to_string(), 2);
        dist.insert("conceptual_inquiry".to_string(), 5);

        let spec = pattern_chart(&pattern_breakdown(&dist)).unwrap();
        assert_eq!(spec.labels, vec!["Conceptual Inquiry", "AI Delegation"]);
        assert_eq!(spec.series[0].values, vec![5.0, 2.0]);
        assert_eq!(spec.segment_colors, vec!["#D97706", "#059669"]);

        assert!(pattern_chart(&pattern_breakdown(&Default::default())).is_none());
    }
}
