//! State Management
//!
//! Reactive global state, the plain view state it wraps, and per-slot
//! request sequencing.

pub mod global;
pub mod requests;
pub mod view;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use view::Phase;
