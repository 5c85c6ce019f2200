//! Fluency Page
//!
//! Runs scoring over recent sessions and shows the gauge, behavior bars,
//! pattern doughnut and per-session breakdown.

use leptos::*;

use crate::charts::ChartSlot;
use crate::components::{ChartCanvas, EmptyState, Loading, ScoreRing};
use crate::fluency::{behavior_bars, pattern_breakdown, BehaviorBar, PatternBreakdown, Tone};
use crate::model::FluencyScore;
use crate::panels::fluency::{
    error_text, session_rows, SessionRow, DEFAULT_SESSION_COUNT, LOADING_TEXT, NO_SCORES_TEXT,
    SESSION_COUNTS,
};
use crate::state::{use_global_state, Phase};

#[component]
pub fn FluencyPage() -> impl IntoView {
    let state = use_global_state();
    let view_state = state.view;
    let phase = state.scoring;
    let (count, set_count) = create_signal(DEFAULT_SESSION_COUNT);

    let scores = create_memo(move |_| view_state.with(|v| v.scores.clone()));
    let results = create_memo(move |_| view_state.with(|v| v.scored().cloned()));
    let sessions = create_memo(move |_| view_state.with(|v| v.sessions.clone()));
    let busy = move || phase.with(Phase::is_busy);
    let show_results = move || {
        matches!(phase.get(), Phase::Idle | Phase::Success) && results.with(Option::is_some)
    };

    let run = move |_| state.run_scoring(count.get_untracked());

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"AI Fluency Score"</h1>
                    <p class="text-gray-500 mt-1">
                        {move || format!("{} sessions available", sessions.with(Vec::len))}
                    </p>
                </div>

                <div class="flex items-center space-x-3">
                    <select
                        id="session-count"
                        class="border border-gray-300 rounded-lg px-3 py-2"
                        on:change=move |ev| {
                            if let Ok(n) = event_target_value(&ev).parse::<usize>() {
                                set_count.set(n);
                            }
                        }
                    >
                        {SESSION_COUNTS
                            .into_iter()
                            .map(|n| view! {
                                <option value=n.to_string() selected={n == DEFAULT_SESSION_COUNT}>
                                    {format!("Last {} sessions", n)}
                                </option>
                            })
                            .collect_view()}
                    </select>
                    <button
                        id="run-scoring-btn"
                        on:click=run
                        disabled=busy
                        class="px-4 py-2 bg-amber-600 hover:bg-amber-700 disabled:opacity-50 text-white rounded-lg font-medium transition-colors"
                    >
                        {move || if busy() { "Analyzing..." } else { "Run Analysis" }}
                    </button>
                </div>
            </div>

            <div id="fluency-results">
                {move || match phase.get() {
                    Phase::Loading => view! { <Loading message=LOADING_TEXT /> }.into_view(),
                    Phase::Error(message) => view! { <EmptyState message=error_text(&message) /> }.into_view(),
                    Phase::Idle | Phase::Success => match scores.with(|s| s.as_ref().map(FluencyScore::has_scored_sessions)) {
                        Some(true) => view! {}.into_view(),
                        Some(false) => view! { <EmptyState message=NO_SCORES_TEXT /> }.into_view(),
                        None => view! {
                            <EmptyState message="Pick how many recent sessions to analyze and run the analysis." />
                        }.into_view(),
                    },
                }}

                // The pattern canvas stays mounted so its chart slot keeps its element
                <div class="space-y-8" style:display=move || if show_results() { "block" } else { "none" }>
                    {move || results.get().map(|score| view! { <ScoreSection score=score /> })}
                    <PatternSection results=results />
                    {move || results.get().map(|score| {
                        let rows = sessions.with(|list| session_rows(&score, list));
                        view! { <SessionList rows=rows /> }
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn ScoreSection(score: FluencyScore) -> impl IntoView {
    let aggregate = score.aggregate;
    let bars = behavior_bars(&aggregate);

    view! {
        <ScoreRing score=aggregate.average_score sessions_scored=aggregate.sessions_scored />

        <section class="behaviors-section bg-white rounded-xl border border-gray-200 p-6">
            <h3 class="text-lg font-semibold mb-4">"Fluency Behaviors vs. Anthropic Benchmarks"</h3>
            <div class="space-y-3">
                {bars.into_iter().map(|bar| view! { <BehaviorRow bar=bar /> }).collect_view()}
            </div>
            <BehaviorLegend />
        </section>
    }
}

#[component]
fn SessionList(rows: Vec<SessionRow>) -> impl IntoView {
    view! {
        <section class="session-list bg-white rounded-xl border border-gray-200 p-6">
            <h3 class="text-lg font-semibold mb-4">"Session Breakdown"</h3>
            {rows.into_iter().map(|row| view! { <SessionItem row=row /> }).collect_view()}
        </section>
    }
}

#[component]
fn BehaviorRow(bar: BehaviorBar) -> impl IntoView {
    view! {
        <div class="behavior-bar">
            <div class="behavior-label flex justify-between text-sm">
                <span class="behavior-name">
                    {bar.behavior.label()}
                    <span class="info-icon ml-1" tabindex="0" title=bar.behavior.description()>"i"</span>
                </span>
                <span class="behavior-pct">{bar.pct_label()}</span>
            </div>
            <div class="bar-track relative h-2 bg-gray-100 rounded">
                <div
                    class=format!("bar-fill h-2 rounded {}", bar.tone.css_class())
                    style=format!("width: {}%; background: {}", bar.user_pct, bar.tone.color())
                />
                <div
                    class="bar-benchmark absolute top-0 h-2 w-0.5 bg-gray-700 opacity-50"
                    style=format!("left: {}%", bar.bench_pct)
                    title=bar.benchmark_title()
                />
            </div>
        </div>
    }
}

#[component]
fn BehaviorLegend() -> impl IntoView {
    let swatch = |tone: Tone, text: &'static str| {
        view! {
            <span class="legend-item flex items-center space-x-1">
                <span class="legend-swatch w-3 h-3 rounded" style=format!("background: {}", tone.color()) />
                <span>{text}</span>
            </span>
        }
    };

    view! {
        <div class="behaviors-legend flex flex-wrap gap-4 mt-4 text-xs text-gray-500">
            {swatch(Tone::Success, "At or above benchmark")}
            {swatch(Tone::Warning, "Within 15pp")}
            {swatch(Tone::Danger, "Below by 15pp+")}
            <span class="legend-item flex items-center space-x-1">
                <span class="legend-swatch w-3 h-3 rounded bg-gray-700 opacity-50" />
                <span>"Anthropic benchmark"</span>
            </span>
        </div>
    }
}

#[component]
fn PatternSection(results: Memo<Option<FluencyScore>>) -> impl IntoView {
    let breakdown = move || {
        results.with(|r| {
            r.as_ref()
                .map(|score| pattern_breakdown(&score.aggregate.pattern_distribution))
        })
    };

    view! {
        <section class="pattern-section bg-white rounded-xl border border-gray-200 p-6">
            <h3 class="text-lg font-semibold mb-4">"Coding Interaction Patterns"</h3>
            <div class="pattern-layout grid md:grid-cols-2 gap-6">
                <div class="pattern-chart-wrap">
                    <ChartCanvas chart=ChartSlot::Pattern width=320 height=320 />
                </div>
                <div class="pattern-legend space-y-2">
                    {move || breakdown().map(|b| {
                        b.shares
                            .into_iter()
                            .map(|share| view! {
                                <div class="pattern-legend-item flex justify-between text-sm">
                                    <span>{share.pattern.label().to_string()}</span>
                                    <span>{share.count_label()}</span>
                                </div>
                            })
                            .collect_view()
                    })}
                </div>
            </div>
            {move || breakdown().map(|b| view! { <PatternQuality breakdown=b /> })}
        </section>
    }
}

#[component]
fn PatternQuality(breakdown: PatternBreakdown) -> impl IntoView {
    let quality_class = if breakdown.is_good() {
        "pattern-quality quality-good text-emerald-700"
    } else {
        "pattern-quality quality-bad text-red-700"
    };

    view! {
        <div class=format!("{} mt-4 font-medium", quality_class)>{breakdown.quality_label()}</div>
    }
}

#[component]
fn SessionItem(row: SessionRow) -> impl IntoView {
    let (expanded, set_expanded) = create_signal(false);
    let score_label = row.score_label();
    let score_style = format!("color: {}", row.tone.color());
    let pattern = format!("Pattern: {}", row.pattern);
    let summary = row.summary;

    view! {
        <div
            class=move || if expanded.get() { "session-item expanded py-3 border-b" } else { "session-item py-3 border-b" }
            on:click=move |_| set_expanded.update(|e| *e = !*e)
        >
            <div class="session-header flex justify-between cursor-pointer">
                <span class="session-id">{row.heading}</span>
                <span class="session-score font-semibold" style=score_style>
                    {score_label}
                </span>
            </div>
            <Show when=move || expanded.get()>
                <div class="session-detail text-sm text-gray-600 mt-2 space-y-1">
                    <p>{summary.clone()}</p>
                    <p>{pattern.clone()}</p>
                </div>
            </Show>
        </div>
    }
}
