//! The alert descriptor stored in application state.

use super::button::Button;

/// Content of a visible alert.
///
/// Fields are private: the constructors guarantee that a secondary button
/// never exists without a primary one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alert<A> {
    title: String,
    message: Option<String>,
    primary: Option<Button<A>>,
    secondary: Option<Button<A>>,
}

impl<A> Alert<A> {
    /// Alert with at most one button, stored as the primary button.
    pub fn new(
        title: impl Into<String>,
        message: Option<String>,
        dismiss_button: Option<Button<A>>,
    ) -> Self {
        Self {
            title: title.into(),
            message,
            primary: dismiss_button,
            secondary: None,
        }
    }

    /// Alert with exactly two buttons.
    pub fn with_buttons(
        title: impl Into<String>,
        message: Option<String>,
        primary: Button<A>,
        secondary: Button<A>,
    ) -> Self {
        Self {
            title: title.into(),
            message,
            primary: Some(primary),
            secondary: Some(secondary),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn primary_button(&self) -> Option<&Button<A>> {
        self.primary.as_ref()
    }

    pub fn secondary_button(&self) -> Option<&Button<A>> {
        self.secondary.as_ref()
    }

    /// Buttons in display order (primary first).
    pub fn buttons(&self) -> impl Iterator<Item = &Button<A>> {
        self.primary.iter().chain(self.secondary.iter())
    }

    pub fn map_action<B>(self, mut f: impl FnMut(A) -> B) -> Alert<B> {
        Alert {
            title: self.title,
            message: self.message,
            primary: self.primary.map(|button| button.map_action(&mut f)),
            secondary: self.secondary.map(|button| button.map_action(&mut f)),
        }
    }
}

/// Whether an alert is shown, and what it shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlertDescriptor<A> {
    /// Not visible.
    Dismissed,
    /// Visible with the given content.
    Shown(Alert<A>),
}

impl<A> Default for AlertDescriptor<A> {
    fn default() -> Self {
        Self::Dismissed
    }
}

impl<A> AlertDescriptor<A> {
    pub fn dismissed() -> Self {
        Self::Dismissed
    }

    /// Shown alert with an optional single dismiss button.
    pub fn shown(
        title: impl Into<String>,
        message: Option<String>,
        dismiss_button: Option<Button<A>>,
    ) -> Self {
        Self::Shown(Alert::new(title, message, dismiss_button))
    }

    /// Shown alert with a primary and a secondary button.
    pub fn shown_with_buttons(
        title: impl Into<String>,
        message: Option<String>,
        primary: Button<A>,
        secondary: Button<A>,
    ) -> Self {
        Self::Shown(Alert::with_buttons(title, message, primary, secondary))
    }

    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown(_))
    }

    pub fn alert(&self) -> Option<&Alert<A>> {
        match self {
            Self::Shown(alert) => Some(alert),
            Self::Dismissed => None,
        }
    }

    pub fn map_action<B>(self, f: impl FnMut(A) -> B) -> AlertDescriptor<B> {
        match self {
            Self::Shown(alert) => AlertDescriptor::Shown(alert.map_action(f)),
            Self::Dismissed => AlertDescriptor::Dismissed,
        }
    }
}

impl<A> From<Alert<A>> for AlertDescriptor<A> {
    fn from(alert: Alert<A>) -> Self {
        Self::Shown(alert)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::ButtonRole;
    use std::collections::HashSet;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum TestAction {
        Confirm,
        Ack,
    }

    #[test]
    fn dismissed_is_default() {
        assert_eq!(
            AlertDescriptor::<TestAction>::default(),
            AlertDescriptor::Dismissed
        );
        assert!(!AlertDescriptor::<TestAction>::dismissed().is_shown());
    }

    #[test]
    fn single_button_helper_fills_primary_only() {
        let descriptor = AlertDescriptor::shown(
            "Error",
            None,
            Some(Button::default("OK").send(TestAction::Ack)),
        );
        let alert = descriptor.alert().expect("shown");
        assert_eq!(alert.title(), "Error");
        assert_eq!(alert.message(), None);
        assert_eq!(alert.primary_button().and_then(Button::label), Some("OK"));
        assert!(alert.secondary_button().is_none());
    }

    #[test]
    fn alert_converts_into_shown_descriptor() {
        let alert: Alert<TestAction> = Alert::new("Heads up", None, None);
        let descriptor: AlertDescriptor<_> = alert.clone().into();
        assert_eq!(descriptor, AlertDescriptor::Shown(alert));
    }

    #[test]
    fn no_button_helper_leaves_both_empty() {
        let alert: Alert<TestAction> = Alert::new("Heads up", Some("Saved".into()), None);
        assert!(alert.primary_button().is_none());
        assert!(alert.secondary_button().is_none());
        assert_eq!(alert.buttons().count(), 0);
    }

    #[test]
    fn two_button_helper_fills_both() {
        let descriptor = AlertDescriptor::shown_with_buttons(
            "Delete",
            Some("Are you sure?".into()),
            Button::default("Confirm").send(TestAction::Confirm),
            Button::cancel(),
        );
        let alert = descriptor.alert().expect("shown");
        assert_eq!(alert.message(), Some("Are you sure?"));
        assert_eq!(
            alert.primary_button().and_then(Button::action),
            Some(&TestAction::Confirm)
        );
        assert_eq!(
            alert.secondary_button().map(Button::role),
            Some(ButtonRole::Cancel)
        );
        let roles: Vec<_> = alert.buttons().map(Button::role).collect();
        assert_eq!(roles, vec![ButtonRole::Default, ButtonRole::Cancel]);
    }

    #[test]
    fn alert_doubles_as_identity() {
        let make = || {
            Alert::with_buttons(
                "Delete",
                None,
                Button::destructive("Delete").send(TestAction::Confirm),
                Button::cancel(),
            )
        };
        let mut seen = HashSet::new();
        assert!(seen.insert(make()));
        assert!(!seen.insert(make()));
        assert!(seen.insert(Alert::new("Other", None, None)));
    }

    #[test]
    fn map_action_rewrites_every_button() {
        let descriptor = AlertDescriptor::shown_with_buttons(
            "Delete",
            None,
            Button::default("Confirm").send(TestAction::Confirm),
            Button::cancel_labeled("Back").send(TestAction::Ack),
        );
        let mapped = descriptor.map_action(|action| format!("{:?}", action));
        let alert = mapped.alert().expect("shown");
        assert_eq!(
            alert.primary_button().and_then(Button::action).map(String::as_str),
            Some("Confirm")
        );
        assert_eq!(
            alert.secondary_button().and_then(Button::action).map(String::as_str),
            Some("Ack")
        );
    }
}
