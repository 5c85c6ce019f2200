//! Score Ring Component
//!
//! Circular SVG gauge for the average fluency score.

use leptos::*;

use crate::panels::fluency::Gauge;

const TRACK: &str = "#e5e7eb";

#[component]
pub fn ScoreRing(score: f64, sessions_scored: usize) -> impl IntoView {
    let gauge = Gauge::new(score);
    let color = gauge.tone.color();

    view! {
        <div class="score-ring-container flex flex-col items-center">
            <div class="score-ring relative w-40 h-40">
                <svg viewBox="0 0 120 120" class="score-svg w-full h-full">
                    <circle cx="60" cy="60" r="52" fill="none" stroke=TRACK stroke-width="8" />
                    <circle
                        cx="60"
                        cy="60"
                        r="52"
                        fill="none"
                        stroke=color
                        stroke-width="8"
                        stroke-dasharray=gauge.circumference.to_string()
                        stroke-dashoffset=gauge.offset.to_string()
                        stroke-linecap="round"
                        transform="rotate(-90 60 60)"
                    />
                </svg>
                <div class="score-text absolute inset-0 flex flex-col items-center justify-center">
                    <span class="score-value text-4xl font-bold" style=format!("color: {}", color)>
                        {gauge.score_label()}
                    </span>
                    <span class="score-label text-sm text-gray-500">"/ 100"</span>
                </div>
            </div>
            <p class="score-summary mt-2 text-gray-600">
                {format!("{} sessions analyzed", sessions_scored)}
            </p>
        </div>
    }
}
