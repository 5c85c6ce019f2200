//! App Root Component
//!
//! Global providers, the tab strip and the four tab panels. Panels stay
//! mounted and are hidden when inactive so their canvases survive tab
//! switches.

use leptos::*;

use crate::components::Nav;
use crate::pages::{FluencyPage, QuickWinsPage, RecommendationsPage, UsagePage};
use crate::state::provide_global_state;
use crate::tabs::Tab;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_global_state();
    state.load_initial();

    // Draw a panel's charts once it is visible with data it has not drawn yet
    let charts_state = state.clone();
    create_effect(move |_| {
        let tab = charts_state.tabs.with(|t| t.active());
        let revision = charts_state.view.with(|v| v.revision(tab));
        let needs_render = charts_state
            .tabs
            .try_update_untracked(|t| t.activate(tab, revision))
            .unwrap_or(false);

        if needs_render {
            let state = charts_state.clone();
            request_animation_frame(move || state.render_charts(tab));
        }
    });

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8">
                <TabPanel tab=Tab::Usage>
                    <UsagePage />
                </TabPanel>
                <TabPanel tab=Tab::Fluency>
                    <FluencyPage />
                </TabPanel>
                <TabPanel tab=Tab::QuickWins>
                    <QuickWinsPage />
                </TabPanel>
                <TabPanel tab=Tab::Recommendations>
                    <RecommendationsPage />
                </TabPanel>
            </main>
        </div>
    }
}

/// Wrapper that shows its children only while `tab` is active
#[component]
fn TabPanel(tab: Tab, children: Children) -> impl IntoView {
    let state = crate::state::use_global_state();
    let tabs = state.tabs;
    let is_active = create_memo(move |_| tabs.with(|t| t.is_active(tab)));

    view! {
        <section
            id=tab.panel_id()
            role="tabpanel"
            class=move || if is_active.get() { "tab-content active" } else { "tab-content" }
            style:display=move || if is_active.get() { "block" } else { "none" }
        >
            {children()}
        </section>
    }
}
