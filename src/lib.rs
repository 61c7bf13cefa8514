//! Declarative alert dialogs for unidirectional data flow.
//!
//! The alert lives in application state as an [`alert::AlertDescriptor`].
//! [`ui::alert::AlertPresenter`] projects it onto a host dialog and turns
//! button taps and dismissals back into actions sent to the
//! [`store::Store`].

pub mod alert;
pub mod config;
pub mod logging;
pub mod store;
pub mod ui;
