//! Presentation adapter between alert state and the host dialog.
//!
//! # Flow
//!
//! ```text
//! store.state().alert ──observe──→ AlertPresenter ──DialogSpec──→ host
//!        ↑                                │
//!        └────────── send(action) ←─handle┘←── DialogEvent ──────┘
//! ```
//!
//! - [`project`] is the pure descriptor -> dialog mapping.
//! - [`AlertPresenter`] remembers which alert is on screen and guarantees a
//!   single `send` per presented alert.

mod presenter;
mod spec;

pub use presenter::{AlertPresenter, DialogEvent, Interaction, PresentationChange};
pub use spec::{project, ButtonLabels, ButtonSlot, DialogSpec, NativeButton, NativeStyle};
