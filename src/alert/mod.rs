//! Declarative alert state.
//!
//! An alert is a plain value kept in application state: either
//! [`AlertDescriptor::Dismissed`] or [`AlertDescriptor::Shown`] with the
//! full content of the dialog. Reducers build descriptors; views only read
//! them.
//!
//! ```
//! use alertkit::alert::{AlertDescriptor, Button};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Action {
//!     Confirm,
//! }
//!
//! let alert = AlertDescriptor::shown_with_buttons(
//!     "Delete",
//!     Some("Are you sure?".into()),
//!     Button::default("Confirm").send(Action::Confirm),
//!     Button::cancel(),
//! );
//! assert!(alert.is_shown());
//! ```

mod button;
mod descriptor;
mod preset;

pub use button::{Button, ButtonRole};
pub use descriptor::{Alert, AlertDescriptor};
pub use preset::{AlertError, AlertPreset, ButtonPreset};
