//! Chart Component
//!
//! Canvas placeholder a chart slot draws into once its tab is shown.

use leptos::*;

use crate::charts::ChartSlot;

#[component]
pub fn ChartCanvas(
    chart: ChartSlot,
    #[prop(default = 800)] width: u32,
    #[prop(default = 320)] height: u32,
) -> impl IntoView {
    view! {
        <canvas
            id=chart.canvas_id()
            width=width.to_string()
            height=height.to_string()
            class="w-full rounded-lg"
        />
    }
}
