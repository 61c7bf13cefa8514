//! Loosely-typed alert descriptions, as read from configuration.
//!
//! Presets are plain data and may describe alerts that the typed
//! constructors refuse to build. Conversion into [`Alert`] is the single
//! point where those combinations are rejected.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::button::{Button, ButtonRole};
use super::descriptor::Alert;

/// Errors raised when a preset does not describe a valid alert.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("secondary button given without a primary button")]
    InvalidButtons,

    #[error("{role} button requires a label")]
    MissingLabel { role: ButtonRole },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonPreset {
    pub role: ButtonRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Action tag sent when the button is tapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertPreset {
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<ButtonPreset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ButtonPreset>,
}

impl TryFrom<&ButtonPreset> for Button<String> {
    type Error = AlertError;

    fn try_from(preset: &ButtonPreset) -> Result<Self, Self::Error> {
        let button = match (preset.role, preset.label.as_deref()) {
            (ButtonRole::Cancel, None) => Button::cancel(),
            (ButtonRole::Cancel, Some(label)) => Button::cancel_labeled(label),
            (ButtonRole::Default, Some(label)) => Button::default(label),
            (ButtonRole::Destructive, Some(label)) => Button::destructive(label),
            (role, None) => return Err(AlertError::MissingLabel { role }),
        };

        Ok(match &preset.action {
            Some(action) => button.send(action.clone()),
            None => button,
        })
    }
}

impl TryFrom<&AlertPreset> for Alert<String> {
    type Error = AlertError;

    fn try_from(preset: &AlertPreset) -> Result<Self, Self::Error> {
        let primary = preset.primary.as_ref().map(Button::<String>::try_from).transpose()?;
        let secondary = preset.secondary.as_ref().map(Button::<String>::try_from).transpose()?;

        match (primary, secondary) {
            (Some(primary), Some(secondary)) => Ok(Alert::with_buttons(
                preset.title.clone(),
                preset.message.clone(),
                primary,
                secondary,
            )),
            (primary, None) => Ok(Alert::new(
                preset.title.clone(),
                preset.message.clone(),
                primary,
            )),
            (None, Some(_)) => Err(AlertError::InvalidButtons),
        }
    }
}
