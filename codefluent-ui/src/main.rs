//! CodeFluent Dashboard
//!
//! Claude Code usage and AI-fluency dashboard built with Leptos (WASM).
//!
//! # Tabs
//!
//! - Usage: token and cost history from the daily report
//! - Fluency Score: scored sessions against the AI Fluency Index benchmarks
//! - Quick Wins: short suggested tasks with copyable prompts
//! - Recommendations: advice derived from the latest scores
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! It talks to the CodeFluent API over HTTP on the page origin.

use leptos::*;

mod api;
mod app;
mod charts;
mod components;
mod fluency;
mod format;
mod model;
mod pages;
mod panels;
mod state;
mod tabs;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
