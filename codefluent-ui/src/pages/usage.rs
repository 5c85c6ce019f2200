//! Usage Page
//!
//! Token and cost history from the daily usage report.

use leptos::*;

use crate::charts::ChartSlot;
use crate::components::{ChartCanvas, EmptyState};
use crate::panels::usage::{model_breakdown, summarize, ModelShare, UsageSummary};
use crate::state::use_global_state;

#[component]
pub fn UsagePage() -> impl IntoView {
    let state = use_global_state();
    let view_state = state.view;

    let summary = create_memo(move |_| view_state.with(|v| summarize(&v.usage)));
    let models = create_memo(move |_| view_state.with(|v| model_breakdown(&v.usage)));
    let error = create_memo(move |_| view_state.with(|v| v.usage_error.clone()));
    let has_data = move || summary.with(Option::is_some);

    view! {
        <div class="space-y-8">
            {move || match (summary.get(), error.get()) {
                (Some(summary), _) => view! { <StatCards summary=summary /> }.into_view(),
                (None, Some(message)) => view! {
                    <EmptyState message=format!("Error: {}", message) />
                }.into_view(),
                (None, None) => view! {
                    <EmptyState message="No usage data yet." />
                }.into_view(),
            }}

            // Canvases stay mounted so chart slots keep their elements
            <div class="space-y-8" style:display=move || if has_data() { "block" } else { "none" }>
                <section class="bg-white rounded-xl border border-gray-200 p-6">
                    <h2 class="text-xl font-semibold mb-4">"Token Usage"</h2>
                    <ChartCanvas chart=ChartSlot::Usage />
                </section>

                <section class="bg-white rounded-xl border border-gray-200 p-6">
                    <h2 class="text-xl font-semibold mb-4">"Daily Cost"</h2>
                    <ChartCanvas chart=ChartSlot::Cost />
                </section>

                <section class="bg-white rounded-xl border border-gray-200 p-6">
                    <h2 class="text-xl font-semibold mb-4">"Cost by Model"</h2>
                    <div id="model-breakdown" class="space-y-3">
                        {move || models.get().into_iter().map(|share| view! { <ModelBar share=share /> }).collect_view()}
                    </div>
                </section>
            </div>
        </div>
    }
}

#[component]
fn StatCards(summary: UsageSummary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <StatCard
                label="Total Tokens"
                id="stat-total-tokens"
                value=summary.total_tokens
                detail=summary.tokens_detail
            />
            <StatCard
                label="Total Cost"
                id="stat-total-cost"
                value=summary.total_cost
                detail=summary.cost_detail
            />
            <StatCard
                label="Days Active"
                id="stat-days-active"
                value=summary.days_active.to_string()
                detail=summary.days_detail
            />
            <StatCard
                label="Models Used"
                id="stat-models-used"
                value=summary.models_count.to_string()
                detail=summary.models_detail
            />
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    id: &'static str,
    #[prop(into)] value: String,
    #[prop(into)] detail: String,
) -> impl IntoView {
    view! {
        <div class="stat-card bg-white rounded-lg border border-gray-200 p-4">
            <div class="text-sm text-gray-500">{label}</div>
            <div id=id class="text-2xl font-bold mt-1">{value}</div>
            <div class="text-xs text-gray-400 mt-1">{detail}</div>
        </div>
    }
}

#[component]
fn ModelBar(share: ModelShare) -> impl IntoView {
    view! {
        <div class="model-bar-item">
            <div class="model-bar-label flex justify-between text-sm">
                <span>{share.short_name()}</span>
                <span>{share.cost_label()}</span>
            </div>
            <div class="model-bar-track h-2 bg-gray-100 rounded">
                <div class="model-bar-fill h-2 bg-emerald-600 rounded" style=format!("width: {}%", share.pct) />
            </div>
        </div>
    }
}
