use serde::{Deserialize, Serialize};

use crate::alert::{AlertPreset, ButtonPreset, ButtonRole};
use crate::ui::alert::ButtonLabels;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Labels the dialog uses when an alert does not supply one.
    #[serde(default)]
    pub labels: ButtonLabels,
    /// Alerts the demo screen can open, in display order.
    #[serde(default = "default_presets")]
    pub presets: Vec<AlertPreset>,
}

fn button(role: ButtonRole, label: Option<&str>, action: Option<&str>) -> ButtonPreset {
    ButtonPreset {
        role,
        label: label.map(str::to_string),
        action: action.map(str::to_string),
    }
}

fn default_presets() -> Vec<AlertPreset> {
    vec![
        AlertPreset {
            name: "delete".to_string(),
            title: "Delete".to_string(),
            message: Some("Are you sure?".to_string()),
            primary: Some(button(ButtonRole::Default, Some("Confirm"), Some("confirm"))),
            secondary: Some(button(ButtonRole::Cancel, None, None)),
        },
        AlertPreset {
            name: "error".to_string(),
            title: "Error".to_string(),
            message: Some("The file could not be saved.".to_string()),
            primary: Some(button(ButtonRole::Default, Some("OK"), Some("ack"))),
            secondary: None,
        },
        AlertPreset {
            name: "interrupted".to_string(),
            title: "Connection lost".to_string(),
            message: Some(
                "Switch to another window to simulate a system interruption.".to_string(),
            ),
            primary: Some(button(ButtonRole::Destructive, Some("Discard"), Some("discard"))),
            secondary: Some(button(ButtonRole::Cancel, Some("Later"), Some("later"))),
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            labels: ButtonLabels::default(),
            presets: default_presets(),
        }
    }
}
