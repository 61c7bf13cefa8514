//! Keyboard handling for the alert dialog.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::alert::{ButtonSlot, DialogEvent, DialogSpec, NativeStyle};
use crate::ui::app::App;

/// Route a key press: to the dialog when one is visible, otherwise to the screen.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    if app.dialog().is_some() {
        app.on_dialog_key(key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let index = ch.to_digit(10).unwrap_or(0) as usize;
            if index > 0 && !app.open_preset(index - 1) {
                tracing::debug!(index, "no preset for key");
            }
        }
        _ => {}
    }
}

/// Keyboard focus among the dialog's buttons. Host-side state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialogFocus {
    index: usize,
    len: usize,
}

impl DialogFocus {
    /// Focus the first button that is not a cancel button.
    pub fn for_dialog(spec: &DialogSpec) -> Self {
        let index = spec
            .buttons
            .iter()
            .position(|button| button.style != NativeStyle::Cancel)
            .unwrap_or(0);
        Self {
            index,
            len: spec.buttons.len(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = if self.index == 0 {
                self.len - 1
            } else {
                self.index - 1
            };
        }
    }

    pub fn slot(&self, spec: &DialogSpec) -> Option<ButtonSlot> {
        spec.buttons.get(self.index).map(|button| button.slot)
    }
}

/// Translate a key press into a dialog event, moving focus as a side effect.
pub fn map_dialog_key(
    key: KeyEvent,
    spec: &DialogSpec,
    focus: &mut DialogFocus,
) -> Option<DialogEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(DialogEvent::Dismissed),
        KeyCode::Enter | KeyCode::Char(' ') => focus.slot(spec).map(DialogEvent::Tapped),
        KeyCode::Left | KeyCode::BackTab => {
            focus.prev();
            None
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            focus.prev();
            None
        }
        KeyCode::Right | KeyCode::Tab => {
            focus.next();
            None
        }
        _ => None,
    }
}
