//! State for the demo screen.

use crate::alert::AlertDescriptor;
use crate::ui::mvi::UiState;

use super::action::DemoAction;

/// Number of log lines kept on screen.
pub const MAX_LOG_ENTRIES: usize = 8;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoState {
    pub alert: AlertDescriptor<DemoAction>,
    /// What happened, oldest first.
    pub log: Vec<String>,
}

impl UiState for DemoState {}

impl DemoState {
    pub fn push_log(&mut self, entry: String) {
        self.log.push(entry);
        if self.log.len() > MAX_LOG_ENTRIES {
            let excess = self.log.len() - MAX_LOG_ENTRIES;
            self.log.drain(..excess);
        }
    }
}
