//! Quick Wins Page

use leptos::*;

use crate::components::{EmptyState, Loading, PromptBox};
use crate::panels::fluency::error_text;
use crate::panels::quickwins::{suggestion_list, QuickWinCard, SuggestionList};
use crate::state::{use_global_state, Phase};

#[component]
pub fn QuickWinsPage() -> impl IntoView {
    let state = use_global_state();
    let view_state = state.view;
    let phase = state.quickwins;

    let suggestions = create_memo(move |_| view_state.with(|v| v.quickwins.clone()));
    let busy = move || phase.with(Phase::is_busy);

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Quick Wins"</h1>
                    <p class="text-gray-500 mt-1">"Small tasks worth handing to Claude Code today"</p>
                </div>
                <button
                    id="load-quickwins-btn"
                    on:click=move |_| state.load_quickwins()
                    disabled=busy
                    class="px-4 py-2 bg-amber-600 hover:bg-amber-700 disabled:opacity-50 text-white rounded-lg font-medium transition-colors"
                >
                    {move || if busy() { "Generating..." } else { "Generate Suggestions" }}
                </button>
            </div>

            <div id="quickwins-results" class="space-y-4">
                {move || match phase.get() {
                    Phase::Loading => view! { <Loading message="Generating suggestions..." /> }.into_view(),
                    Phase::Error(message) => view! { <EmptyState message=error_text(&message) /> }.into_view(),
                    Phase::Idle | Phase::Success => match suggestions.with(|s| s.as_deref().map(suggestion_list)) {
                        Some(SuggestionList::Empty(message)) => view! { <EmptyState message=message /> }.into_view(),
                        Some(SuggestionList::Cards(cards)) => cards
                            .into_iter()
                            .map(|card| view! { <TaskCard card=card /> })
                            .collect_view(),
                        None => view! {}.into_view(),
                    },
                }}
            </div>
        </div>
    }
}

#[component]
fn TaskCard(card: QuickWinCard) -> impl IntoView {
    view! {
        <div class="task-card bg-white rounded-xl border border-gray-200 p-6 space-y-3">
            <div class="task-header">
                <span class="task-title text-lg font-semibold">{card.task}</span>
            </div>
            <div class="task-meta flex items-center space-x-3 text-sm text-gray-500">
                <span class="task-repo font-mono">{card.repo}</span>
                <span class="task-time">{card.minutes_label}</span>
                <span class=format!("task-category px-2 py-0.5 rounded-full text-xs {}", card.category.css_class())>
                    {card.category_label}
                </span>
            </div>
            <div class="task-prompt">
                <PromptBox text=card.prompt />
            </div>
        </div>
    }
}
