//! Alert buttons and their roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic category of a button. Only affects visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonRole {
    Cancel,
    Default,
    Destructive,
}

impl fmt::Display for ButtonRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ButtonRole::Cancel => "cancel",
            ButtonRole::Default => "default",
            ButtonRole::Destructive => "destructive",
        };
        f.write_str(name)
    }
}

/// A single alert button.
///
/// Buttons are only built through the role constructors, so a label-less
/// button is always a cancel button:
///
/// ```
/// use alertkit::alert::{Button, ButtonRole};
///
/// let confirm = Button::default("Confirm").send("confirm");
/// assert_eq!(confirm.role(), ButtonRole::Default);
/// assert_eq!(confirm.action(), Some(&"confirm"));
///
/// let cancel: Button<&str> = Button::cancel();
/// assert_eq!(cancel.label(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Button<A> {
    role: ButtonRole,
    label: Option<String>,
    action: Option<A>,
}

impl<A> Button<A> {
    /// A button with the default (affirmative) role.
    #[allow(clippy::should_implement_trait)]
    pub fn default(label: impl Into<String>) -> Self {
        Self::labeled(ButtonRole::Default, label)
    }

    pub fn destructive(label: impl Into<String>) -> Self {
        Self::labeled(ButtonRole::Destructive, label)
    }

    /// A cancel button using the host's default cancel label.
    pub fn cancel() -> Self {
        Self {
            role: ButtonRole::Cancel,
            label: None,
            action: None,
        }
    }

    pub fn cancel_labeled(label: impl Into<String>) -> Self {
        Self::labeled(ButtonRole::Cancel, label)
    }

    fn labeled(role: ButtonRole, label: impl Into<String>) -> Self {
        Self {
            role,
            label: Some(label.into()),
            action: None,
        }
    }

    /// Attach the action dispatched when this button is tapped.
    pub fn send(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    pub fn role(&self) -> ButtonRole {
        self.role
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Re-type the action payload, keeping role and label.
    pub fn map_action<B>(self, f: impl FnOnce(A) -> B) -> Button<B> {
        Button {
            role: self.role,
            label: self.label,
            action: self.action.map(f),
        }
    }
}
