//! Canvas Renderer
//!
//! Draws a [`ChartSpec`] onto an HTML5 canvas addressed by element id.

use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::spec::{ChartKind, ChartSpec};
use super::ChartHandle;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;
const GRID_LINES: usize = 5;
const MAX_X_LABELS: usize = 8;

const AXIS_TEXT: &str = "#6b7280";
const GRID: &str = "#e5e7eb";

pub struct CanvasChart {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasChart {
    /// Draws `spec` into the canvas with id `canvas_id`. Returns `None` when
    /// the element is missing or has no 2d context.
    pub fn draw(canvas_id: &str, spec: &ChartSpec) -> Option<Self> {
        let canvas = web_sys::window()?
            .document()?
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;

        let chart = Self { canvas, ctx };
        chart.clear();
        match spec.kind {
            ChartKind::StackedArea => chart.draw_stacked(spec),
            ChartKind::Bar => chart.draw_bars(spec),
            ChartKind::Doughnut => chart.draw_doughnut(spec),
        }
        Some(chart)
    }

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&self) {
        let (width, height) = self.size();
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn plot_area(&self) -> (f64, f64) {
        let (width, height) = self.size();
        (
            width - MARGIN_LEFT - MARGIN_RIGHT,
            height - MARGIN_TOP - MARGIN_BOTTOM,
        )
    }

    fn y_to_px(&self, value: f64, y_max: f64) -> f64 {
        let (_, chart_height) = self.plot_area();
        MARGIN_TOP + chart_height - (value / y_max) * chart_height
    }

    fn draw_axes(&self, spec: &ChartSpec, y_max: f64, x_at: impl Fn(usize) -> f64) {
        let (width, height) = self.size();
        let ctx = &self.ctx;

        ctx.set_stroke_style(&GRID.into());
        ctx.set_line_width(1.0);
        ctx.set_font("12px sans-serif");

        for i in 0..=GRID_LINES {
            let value = y_max * (i as f64 / GRID_LINES as f64);
            let y = self.y_to_px(value, y_max);
            ctx.begin_path();
            ctx.move_to(MARGIN_LEFT, y);
            ctx.line_to(width - MARGIN_RIGHT, y);
            ctx.stroke();

            ctx.set_fill_style(&AXIS_TEXT.into());
            let _ = ctx.fill_text(&spec.y_format.label(value), 5.0, y + 4.0);
        }

        let step = (spec.labels.len() + MAX_X_LABELS - 1) / MAX_X_LABELS;
        for (i, label) in spec.labels.iter().enumerate().step_by(step.max(1)) {
            let _ = ctx.fill_text(label, x_at(i) - 15.0, height - 10.0);
        }
    }

    fn draw_stacked(&self, spec: &ChartSpec) {
        let points = spec.labels.len();
        if points == 0 {
            return;
        }
        let (chart_width, _) = self.plot_area();
        let y_max = spec.y_max();
        let x_at = |i: usize| {
            if points == 1 {
                MARGIN_LEFT + chart_width / 2.0
            } else {
                MARGIN_LEFT + (i as f64 / (points - 1) as f64) * chart_width
            }
        };

        self.draw_axes(spec, y_max, x_at);

        let ctx = &self.ctx;
        let mut baseline = vec![0.0; points];
        for series in &spec.series {
            let top: Vec<f64> = (0..points)
                .map(|i| baseline[i] + series.values.get(i).copied().unwrap_or(0.0))
                .collect();

            ctx.begin_path();
            for (i, value) in top.iter().enumerate() {
                let (x, y) = (x_at(i), self.y_to_px(*value, y_max));
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            for i in (0..points).rev() {
                ctx.line_to(x_at(i), self.y_to_px(baseline[i], y_max));
            }
            ctx.close_path();
            ctx.set_fill_style(&series.fill.as_str().into());
            ctx.fill();

            ctx.begin_path();
            for (i, value) in top.iter().enumerate() {
                let (x, y) = (x_at(i), self.y_to_px(*value, y_max));
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.set_stroke_style(&series.color.as_str().into());
            ctx.set_line_width(2.0);
            ctx.stroke();

            baseline = top;
        }
    }

    fn draw_bars(&self, spec: &ChartSpec) {
        let points = spec.labels.len();
        if points == 0 {
            return;
        }
        let (chart_width, _) = self.plot_area();
        let y_max = spec.y_max();
        let slot_width = chart_width / points as f64;
        let x_at = |i: usize| MARGIN_LEFT + slot_width * (i as f64 + 0.5);

        self.draw_axes(spec, y_max, x_at);

        let groups = spec.series.len().max(1) as f64;
        let bar_width = slot_width * 0.7 / groups;
        for (s, series) in spec.series.iter().enumerate() {
            self.ctx.set_fill_style(&series.fill.as_str().into());
            for (i, value) in series.values.iter().enumerate() {
                let x = x_at(i) - slot_width * 0.35 + bar_width * s as f64;
                let y = self.y_to_px(*value, y_max);
                let base = self.y_to_px(0.0, y_max);
                self.ctx.fill_rect(x, y, bar_width, base - y);
            }
        }
    }

    fn draw_doughnut(&self, spec: &ChartSpec) {
        let values = match spec.series.first() {
            Some(series) => &series.values,
            None => return,
        };
        let total: f64 = values.iter().sum();
        if total <= 0.0 {
            return;
        }

        let (width, height) = self.size();
        let (cx, cy) = (width / 2.0, height / 2.0);
        let outer = (width.min(height) / 2.0) - 10.0;
        let inner = outer * 0.6;

        let mut start = -PI / 2.0;
        for (i, value) in values.iter().enumerate() {
            let sweep = value / total * 2.0 * PI;
            let end = start + sweep;
            let color = spec
                .segment_colors
                .get(i % spec.segment_colors.len().max(1))
                .map(String::as_str)
                .unwrap_or(AXIS_TEXT);

            self.ctx.begin_path();
            let _ = self.ctx.arc(cx, cy, outer, start, end);
            let _ = self
                .ctx
                .arc_with_anticlockwise(cx, cy, inner, end, start, true);
            self.ctx.close_path();
            self.ctx.set_fill_style(&color.into());
            self.ctx.fill();

            start = end;
        }
    }
}

impl ChartHandle for CanvasChart {
    fn destroy(&mut self) {
        self.clear();
    }
}
