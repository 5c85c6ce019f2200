//! Usage Panel Model
//!
//! Totals, model-cost shares and chart specs derived from the daily report.

use std::collections::BTreeSet;

use crate::charts::{AxisFormat, ChartKind, ChartSpec, Series};
use crate::format::{format_cost, format_tokens, short_model_name};
use crate::model::DailyUsage;

/// The four stat cards above the charts
#[derive(Clone, Debug, PartialEq)]
pub struct UsageSummary {
    pub total_tokens: String,
    pub tokens_detail: String,
    pub total_cost: String,
    pub cost_detail: String,
    pub days_active: usize,
    pub days_detail: String,
    pub models_count: usize,
    pub models_detail: String,
}

/// `None` for an empty report
pub fn summarize(daily: &[DailyUsage]) -> Option<UsageSummary> {
    let first = daily.first()?;
    let last = daily.last()?;

    let total_tokens: f64 = daily.iter().map(|d| d.total_tokens).sum();
    let total_cost: f64 = daily.iter().map(|d| d.total_cost).sum();
    let days_active = daily
        .iter()
        .map(|d| d.date.as_str())
        .collect::<BTreeSet<_>>()
        .len();

    let mut models: Vec<&str> = Vec::new();
    for model in daily.iter().flat_map(|d| d.models_used.iter()) {
        if !models.contains(&model.as_str()) {
            models.push(model);
        }
    }

    Some(UsageSummary {
        total_tokens: format_tokens(total_tokens),
        tokens_detail: format!("across {} days", days_active),
        total_cost: format_cost(total_cost),
        cost_detail: format!("avg {}/day", format_cost(total_cost / days_active as f64)),
        days_active,
        days_detail: format!("{} to {}", first.date, last.date),
        models_count: models.len(),
        models_detail: models
            .iter()
            .map(|m| short_model_name(m))
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// One bar of the model-cost breakdown
#[derive(Clone, Debug, PartialEq)]
pub struct ModelShare {
    pub name: String,
    pub cost: f64,
    /// Share of total cost, one decimal
    pub pct: f64,
}

impl ModelShare {
    pub fn short_name(&self) -> String {
        short_model_name(&self.name)
    }

    pub fn cost_label(&self) -> String {
        format!("{} ({:.1}%)", format_cost(self.cost), self.pct)
    }
}

/// Cost per model over the whole report, most expensive first
pub fn model_breakdown(daily: &[DailyUsage]) -> Vec<ModelShare> {
    let mut totals: Vec<(String, f64)> = Vec::new();
    for breakdown in daily.iter().flat_map(|d| d.model_breakdowns.iter()) {
        match totals.iter_mut().find(|(name, _)| *name == breakdown.model_name) {
            Some((_, cost)) => *cost += breakdown.cost,
            None => totals.push((breakdown.model_name.clone(), breakdown.cost)),
        }
    }

    let total_cost: f64 = totals.iter().map(|(_, cost)| cost).sum();
    let mut shares: Vec<ModelShare> = totals
        .into_iter()
        .map(|(name, cost)| {
            let pct = if total_cost > 0.0 {
                (cost / total_cost * 1000.0).round() / 10.0
            } else {
                0.0
            };
            ModelShare { name, cost, pct }
        })
        .collect();
    shares.sort_by(|a, b| b.cost.total_cmp(&a.cost));
    shares
}

fn dates(daily: &[DailyUsage]) -> Vec<String> {
    daily.iter().map(|d| d.date.clone()).collect()
}

fn token_series(label: &str, color: &str, fill: &str, values: Vec<f64>) -> Series {
    Series {
        label: label.to_string(),
        values,
        color: color.to_string(),
        fill: fill.to_string(),
    }
}

/// Stacked token breakdown, cache reads at the bottom
pub fn token_chart(daily: &[DailyUsage]) -> ChartSpec {
    let column = |f: fn(&DailyUsage) -> f64| daily.iter().map(f).collect::<Vec<_>>();

    ChartSpec {
        kind: ChartKind::StackedArea,
        labels: dates(daily),
        series: vec![
            token_series(
                "Cache Read",
                "#D97706",
                "rgba(217, 119, 6, 0.35)",
                column(|d| d.cache_read_tokens),
            ),
            token_series(
                "Cache Creation",
                "#B45309",
                "rgba(180, 83, 9, 0.35)",
                column(|d| d.cache_creation_tokens),
            ),
            token_series(
                "Input",
                "#059669",
                "rgba(5, 150, 105, 0.35)",
                column(|d| d.input_tokens),
            ),
            token_series(
                "Output",
                "#2563EB",
                "rgba(37, 99, 235, 0.35)",
                column(|d| d.output_tokens),
            ),
        ],
        y_format: AxisFormat::Tokens,
        segment_colors: Vec::new(),
    }
}

pub fn cost_chart(daily: &[DailyUsage]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: dates(daily),
        series: vec![Series {
            label: "Cost (USD)".to_string(),
            values: daily.iter().map(|d| d.total_cost).collect(),
            color: "#059669".to_string(),
            fill: "rgba(5, 150, 105, 0.8)".to_string(),
        }],
        y_format: AxisFormat::Cost,
        segment_colors: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelBreakdown;

    fn day(date: &str, tokens: f64, cost: f64, models: &[(&str, f64)]) -> DailyUsage {
        DailyUsage {
            date: date.to_string(),
            total_tokens: tokens,
            total_cost: cost,
            models_used: models.iter().map(|(m, _)| m.to_string()).collect(),
            model_breakdowns: models
                .iter()
                .map(|(m, c)| ModelBreakdown {
                    model_name: m.to_string(),
                    cost: *c,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary() {
        let daily = vec![
            day("2026-02-01", 1_200_000.0, 4.0, &[("claude-sonnet-4-5-20250929", 4.0)]),
            day(
                "2026-02-03",
                1_300_000.0,
                2.0,
                &[("claude-opus-4-6-20260101", 1.5), ("claude-sonnet-4-5-20250929", 0.5)],
            ),
        ];

        let summary = summarize(&daily).unwrap();
        assert_eq!(summary.total_tokens, "2.5M");
        assert_eq!(summary.tokens_detail, "across 2 days");
        assert_eq!(summary.total_cost, "$6.00");
        assert_eq!(summary.cost_detail, "avg $3.00/day");
        assert_eq!(summary.days_detail, "2026-02-01 to 2026-02-03");
        assert_eq!(summary.models_count, 2);
        assert_eq!(summary.models_detail, "claude-sonnet-4-5, claude-opus-4-6");
    }

    #[test]
    fn test_empty_usage() {
        assert!(summarize(&[]).is_none());
        assert!(model_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_model_percentages_sum_to_100() {
        let daily = vec![
            day("2026-02-01", 0.0, 3.0, &[("a", 1.0), ("b", 1.0), ("c", 1.0)]),
            day("2026-02-02", 0.0, 2.0, &[("b", 2.0)]),
        ];

        let shares = model_breakdown(&daily);
        assert_eq!(shares[0].name, "b");
        assert_eq!(shares[0].pct, 60.0);
        assert_eq!(shares[0].cost_label(), "$3.00 (60.0%)");

        let sum: f64 = shares.iter().map(|s| s.pct).sum();
        assert!((sum - 100.0).abs() <= 0.1 * shares.len() as f64);
    }

    #[test]
    fn test_zero_cost_gives_zero_percent() {
        let daily = vec![day("2026-02-01", 10.0, 0.0, &[("a", 0.0), ("b", 0.0)])];
        assert!(model_breakdown(&daily).iter().all(|s| s.pct == 0.0));
    }

    #[test]
    fn test_chart_specs() {
        let mut first = day("2026-02-01", 0.0, 1.25, &[]);
        first.cache_read_tokens = 100.0;
        first.output_tokens = 7.0;
        let daily = vec![first];

        let tokens = token_chart(&daily);
        assert_eq!(tokens.kind, ChartKind::StackedArea);
        assert_eq!(tokens.series.len(), 4);
        assert_eq!(tokens.series[0].label, "Cache Read");
        assert_eq!(tokens.series[0].values, vec![100.0]);
        assert_eq!(tokens.series[3].color, "#2563EB");

        let cost = cost_chart(&daily);
        assert_eq!(cost.labels, vec!["2026-02-01"]);
        assert_eq!(cost.series[0].values, vec![1.25]);
        assert_eq!(cost.y_format, AxisFormat::Cost);
    }
}
