//! Navigation Component
//!
//! Header with the brand and one button per tab.

use leptos::*;

use crate::state::use_global_state;
use crate::tabs::Tab;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-xl font-bold text-gray-900">"CodeFluent"</span>
                        <span class="text-sm text-gray-500">"Claude Code usage & AI fluency"</span>
                    </div>

                    <div class="flex items-center space-x-1" role="tablist">
                        {Tab::ALL.into_iter().map(|tab| view! { <TabButton tab=tab /> }).collect_view()}
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn TabButton(tab: Tab) -> impl IntoView {
    let state = use_global_state();
    let tabs = state.tabs;
    let is_active = create_memo(move |_| tabs.with(|t| t.is_active(tab)));

    view! {
        <button
            role="tab"
            data-tab=tab.key()
            aria-selected=move || is_active.get().to_string()
            on:click=move |_| state.select_tab(tab)
            class=move || {
                let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                if is_active.get() {
                    format!("{} bg-amber-600 text-white", base)
                } else {
                    format!("{} text-gray-600 hover:bg-gray-100", base)
                }
            }
        >
            {tab.label()}
        </button>
    }
}
