//! Chart Specs

use crate::format::{format_cost, format_tokens};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    StackedArea,
    Bar,
    Doughnut,
}

/// How y-axis ticks are labelled
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisFormat {
    Tokens,
    Cost,
    #[default]
    None,
}

impl AxisFormat {
    pub fn label(self, value: f64) -> String {
        match self {
            AxisFormat::Tokens => format_tokens(value),
            AxisFormat::Cost => format_cost(value),
            AxisFormat::None => format!("{}", value.round() as i64),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    /// Line or bar colour
    pub color: String,
    /// Area fill; bars use this as the bar colour
    pub fill: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub y_format: AxisFormat,
    /// Doughnut only, one colour per label
    pub segment_colors: Vec<String>,
}

impl ChartSpec {
    /// Largest y value the chart must fit; stacked series are summed
    pub fn y_max(&self) -> f64 {
        let points = self.labels.len();
        let max = match self.kind {
            ChartKind::StackedArea => (0..points)
                .map(|i| {
                    self.series
                        .iter()
                        .map(|s| s.values.get(i).copied().unwrap_or(0.0))
                        .sum::<f64>()
                })
                .fold(0.0, f64::max),
            _ => self
                .series
                .iter()
                .flat_map(|s| s.values.iter().copied())
                .fold(0.0, f64::max),
        };
        if max > 0.0 {
            max
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Series {
        Series {
            label: "s".into(),
            values: values.to_vec(),
            color: "#000".into(),
            fill: "#000".into(),
        }
    }

    #[test]
    fn test_stacked_max_sums_series() {
        let spec = ChartSpec {
            kind: ChartKind::StackedArea,
            labels: vec!["a".into(), "b".into()],
            series: vec![series(&[1.0, 4.0]), series(&[2.0, 3.0])],
            y_format: AxisFormat::Tokens,
            segment_colors: Vec::new(),
        };
        assert_eq!(spec.y_max(), 7.0);
    }

    #[test]
    fn test_empty_chart_has_unit_axis() {
        let spec = ChartSpec {
            kind: ChartKind::Bar,
            labels: Vec::new(),
            series: Vec::new(),
            y_format: AxisFormat::Cost,
            segment_colors: Vec::new(),
        };
        assert_eq!(spec.y_max(), 1.0);
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(AxisFormat::Tokens.label(2_500_000.0), "2.5M");
        assert_eq!(AxisFormat::Cost.label(3.0), "$3.00");
        assert_eq!(AxisFormat::None.label(4.4), "4");
    }
}
