//! Recommendations Page
//!
//! Advice derived from the latest scores. No network access of its own.

use leptos::*;

use crate::components::{EmptyState, PromptBox};
use crate::fluency::recommendations::DoingWell;
use crate::fluency::{recommend, Recommendation, RESEARCH_SOURCES};
use crate::panels::NO_RECOMMENDATIONS_TEXT;
use crate::state::use_global_state;

#[component]
pub fn RecommendationsPage() -> impl IntoView {
    let state = use_global_state();
    let view_state = state.view;

    let aggregate = create_memo(move |_| {
        view_state.with(|v| v.scored().map(|score| score.aggregate.clone()))
    });

    view! {
        <div id="recommendations-content" class="space-y-8">
            <h1 class="text-3xl font-bold">"Recommendations"</h1>
            {move || match aggregate.get() {
                None => view! { <EmptyState message=NO_RECOMMENDATIONS_TEXT /> }.into_view(),
                Some(aggregate) => {
                    let plan = recommend(&aggregate);
                    view! {
                        <RecSection title="HIGH IMPACT" recs=plan.high />
                        <RecSection title="MEDIUM IMPACT" recs=plan.medium />
                        <DoingWellSection items=plan.doing_well />
                        <ResearchSources />
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn RecSection(title: &'static str, recs: Vec<&'static Recommendation>) -> impl IntoView {
    if recs.is_empty() {
        return view! {}.into_view();
    }

    view! {
        <div class="rec-section space-y-4">
            <div class="rec-section-title text-sm font-bold tracking-wide text-gray-500">{title}</div>
            {recs.into_iter().map(|rec| view! { <RecCard rec=rec /> }).collect_view()}
        </div>
    }
    .into_view()
}

#[component]
fn RecCard(rec: &'static Recommendation) -> impl IntoView {
    view! {
        <div class="rec-card bg-white rounded-xl border border-gray-200 p-6 space-y-3">
            <div class="rec-title text-lg font-semibold">{rec.title}</div>
            <div class="rec-advice text-gray-700">{rec.advice}</div>
            {rec.action.map(|action| view! {
                <div class="rec-action text-sm bg-amber-50 border-l-4 border-amber-500 p-3">{action}</div>
            })}
            {rec.prompt.map(|prompt| view! {
                <div class="rec-prompt-section space-y-2">
                    <div class="rec-prompt-label text-sm text-gray-500">"Try this prompt in Claude Code:"</div>
                    <PromptBox text=prompt />
                </div>
            })}
            <div class="rec-source text-xs text-gray-400">{rec.source}</div>
        </div>
    }
}

#[component]
fn DoingWellSection(items: Vec<DoingWell>) -> impl IntoView {
    if items.is_empty() {
        return view! {}.into_view();
    }

    view! {
        <div class="rec-section space-y-4">
            <div class="rec-section-title text-sm font-bold tracking-wide text-gray-500">"YOU'RE DOING WELL"</div>
            <div class="rec-card bg-white rounded-xl border border-gray-200 p-6 space-y-2">
                {items
                    .into_iter()
                    .map(|item| view! { <div class="doing-well-item text-emerald-700">{item.label()}</div> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

#[component]
fn ResearchSources() -> impl IntoView {
    view! {
        <div class="research-sources space-y-2">
            <h3 class="text-lg font-semibold">"Research Sources"</h3>
            {RESEARCH_SOURCES
                .into_iter()
                .map(|(title, href)| view! {
                    <a href=href target="_blank" rel="noopener" class="block text-amber-700 hover:underline">
                        {title}
                    </a>
                })
                .collect_view()}
        </div>
    }
}
