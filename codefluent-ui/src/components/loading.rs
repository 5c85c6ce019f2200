//! Loading Component

use leptos::*;

/// Spinner with a caption
#[component]
pub fn Loading(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 space-y-4">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-500">{message}</p>
        </div>
    }
}

/// Grey placeholder paragraph for empty and error states
#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="empty-state text-center text-gray-500 py-12">{message}</p>
    }
}
