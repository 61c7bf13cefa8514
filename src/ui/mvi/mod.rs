//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────── send ────────────┘
//! ```
//!
//! - **State**: Immutable representation of UI state
//! - **Action**: User interactions or system events
//! - **Reducer**: Pure function that transforms state based on actions

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::Reducer;
pub use state::UiState;
