//! Demo feature: a screen that opens configured alerts.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state, including the alert descriptor
//! - `action.rs` - User/system actions
//! - `reducer.rs` - State transitions

mod action;
mod reducer;
mod state;

pub use action::DemoAction;
pub use reducer::DemoReducer;
pub use state::{DemoState, MAX_LOG_ENTRIES};
