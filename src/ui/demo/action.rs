//! Actions for the demo screen.

use crate::alert::Alert;
use crate::ui::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum DemoAction {
    /// Show the given alert.
    Present(Box<Alert<DemoAction>>),

    /// An alert button with this action tag was tapped.
    Button(String),

    /// The alert was closed by the host without a button tap.
    AlertDismissed,

    /// An alert button without an action was tapped; forget the alert.
    AlertCleared,
}

impl Action for DemoAction {}
