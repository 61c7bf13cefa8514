//! Projection of an alert descriptor onto a host dialog specification.

use serde::{Deserialize, Serialize};

use crate::alert::{Alert, AlertDescriptor, Button, ButtonRole};

/// Which alert button a native button stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSlot {
    Primary,
    Secondary,
}

/// Visual treatment the host applies to a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeStyle {
    Cancel,
    Affirmative,
    Destructive,
}

impl From<ButtonRole> for NativeStyle {
    fn from(role: ButtonRole) -> Self {
        match role {
            ButtonRole::Cancel => NativeStyle::Cancel,
            ButtonRole::Default => NativeStyle::Affirmative,
            ButtonRole::Destructive => NativeStyle::Destructive,
        }
    }
}

/// Localized labels the host uses when an alert does not provide one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonLabels {
    /// Label of a cancel button created without a label.
    #[serde(default = "default_cancel_label")]
    pub cancel: String,
    /// Label of the dismiss button added to an alert without buttons.
    #[serde(default = "default_ok_label")]
    pub ok: String,
}

fn default_cancel_label() -> String {
    "Cancel".to_string()
}

fn default_ok_label() -> String {
    "OK".to_string()
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            cancel: default_cancel_label(),
            ok: default_ok_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeButton {
    pub slot: ButtonSlot,
    pub label: String,
    pub style: NativeStyle,
}

/// Everything the host needs to build its dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogSpec {
    pub title: String,
    pub message: Option<String>,
    /// One or two buttons, primary first.
    pub buttons: Vec<NativeButton>,
}

impl DialogSpec {
    /// Build the dialog for a visible alert.
    ///
    /// An alert without buttons still gets a single affirmative button so
    /// the user can close it; that button carries no action.
    pub fn from_alert<A>(alert: &Alert<A>, labels: &ButtonLabels) -> Self {
        let mut buttons = Vec::with_capacity(2);
        match alert.primary_button() {
            Some(button) => buttons.push(native_button(ButtonSlot::Primary, button, labels)),
            None => buttons.push(NativeButton {
                slot: ButtonSlot::Primary,
                label: labels.ok.clone(),
                style: NativeStyle::Affirmative,
            }),
        }
        if let Some(button) = alert.secondary_button() {
            buttons.push(native_button(ButtonSlot::Secondary, button, labels));
        }

        Self {
            title: alert.title().to_string(),
            message: alert.message().map(str::to_string),
            buttons,
        }
    }

    pub fn button(&self, slot: ButtonSlot) -> Option<&NativeButton> {
        self.buttons.iter().find(|button| button.slot == slot)
    }
}

fn native_button<A>(slot: ButtonSlot, button: &Button<A>, labels: &ButtonLabels) -> NativeButton {
    let label = match button.label() {
        Some(label) => label.to_string(),
        None => labels.cancel.clone(),
    };
    NativeButton {
        slot,
        label,
        style: button.role().into(),
    }
}

/// The "currently visible dialog, or none" projection.
pub fn project<A>(descriptor: &AlertDescriptor<A>, labels: &ButtonLabels) -> Option<DialogSpec> {
    descriptor
        .alert()
        .map(|alert| DialogSpec::from_alert(alert, labels))
}
