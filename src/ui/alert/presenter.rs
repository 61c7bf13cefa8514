//! Binds an alert descriptor to a host dialog and routes interactions.

use crate::alert::{Alert, AlertDescriptor};

use super::spec::{project, ButtonLabels, ButtonSlot, DialogSpec};

/// Something the host reports about the visible dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// The user tapped one of the dialog's buttons.
    Tapped(ButtonSlot),
    /// The dialog closed without a button tap (system interruption, escape).
    Dismissed,
}

/// What the presenter did with a [`DialogEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// The tapped button's action was sent.
    ButtonSent { slot: ButtonSlot },
    /// The tapped button had no action; the dialog closed and nothing was sent.
    ///
    /// The store still holds the alert as shown. The host must reset it to
    /// [`AlertDescriptor::Dismissed`], otherwise an equal alert set later is
    /// treated as unchanged and never presented.
    ClosedWithoutAction { slot: ButtonSlot },
    /// The non-user dismissal action was sent.
    DismissSent,
}

/// How the host should update its dialog after an observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentationChange {
    Present(DialogSpec),
    Hide,
    Unchanged,
}

#[derive(Debug)]
enum Presentation<A> {
    Hidden,
    Visible { alert: Alert<A>, dialog: DialogSpec },
    /// Closed by an interaction; waiting for the store to move on.
    Closed(Alert<A>),
}

/// Presents at most one alert at a time and sends at most one action per
/// presented alert.
///
/// The presenter never touches application state: descriptors come in
/// through [`observe`](Self::observe), and interactions leave through the
/// `send` callback given to [`handle`](Self::handle).
#[derive(Debug)]
pub struct AlertPresenter<A> {
    on_dismiss: A,
    labels: ButtonLabels,
    presentation: Presentation<A>,
}

impl<A> AlertPresenter<A>
where
    A: Clone + PartialEq + std::fmt::Debug,
{
    /// `on_dismiss` is sent when the dialog closes without a button tap.
    pub fn new(on_dismiss: A) -> Self {
        Self::with_labels(on_dismiss, ButtonLabels::default())
    }

    pub fn with_labels(on_dismiss: A, labels: ButtonLabels) -> Self {
        Self {
            on_dismiss,
            labels,
            presentation: Presentation::Hidden,
        }
    }

    /// Dialog currently on screen, if any.
    pub fn dialog(&self) -> Option<&DialogSpec> {
        match &self.presentation {
            Presentation::Visible { dialog, .. } => Some(dialog),
            _ => None,
        }
    }

    pub fn is_presenting(&self) -> bool {
        matches!(self.presentation, Presentation::Visible { .. })
    }

    /// Reconcile the dialog with the descriptor held by the store.
    ///
    /// Observing the same descriptor again is a no-op, including after the
    /// user closed its dialog.
    pub fn observe(&mut self, descriptor: &AlertDescriptor<A>) -> PresentationChange {
        let current = match &self.presentation {
            Presentation::Hidden => None,
            Presentation::Visible { alert, .. } | Presentation::Closed(alert) => Some(alert),
        };
        let alert = descriptor.alert();
        if alert.is_some() && alert == current {
            return PresentationChange::Unchanged;
        }
        let had_alert = current.is_some();

        match (alert, project(descriptor, &self.labels)) {
            (Some(alert), Some(dialog)) => {
                tracing::debug!(title = %alert.title(), buttons = dialog.buttons.len(), "presenting alert");
                self.presentation = Presentation::Visible {
                    alert: alert.clone(),
                    dialog: dialog.clone(),
                };
                PresentationChange::Present(dialog)
            }
            _ => {
                let was_visible = self.is_presenting();
                if had_alert {
                    self.presentation = Presentation::Hidden;
                }
                if was_visible {
                    tracing::debug!("alert dismissed by state, hiding dialog");
                    PresentationChange::Hide
                } else {
                    PresentationChange::Unchanged
                }
            }
        }
    }

    /// Route a host event to `send`.
    ///
    /// Returns `None` when no dialog is visible (the event is stale) or the
    /// event names a button the dialog does not have. Otherwise at most one
    /// action is sent, and the dialog is closed afterwards.
    ///
    /// On [`Interaction::ClosedWithoutAction`] nothing reaches the store, so
    /// the host must clear the alert itself.
    pub fn handle(&mut self, event: DialogEvent, mut send: impl FnMut(A)) -> Option<Interaction> {
        let Presentation::Visible { alert, .. } = &self.presentation else {
            tracing::trace!(?event, "ignoring dialog event, no alert visible");
            return None;
        };

        let interaction = match event {
            DialogEvent::Tapped(slot) => {
                let button = match slot {
                    ButtonSlot::Primary => alert.primary_button(),
                    ButtonSlot::Secondary => alert.secondary_button(),
                };
                match (button, slot) {
                    (Some(button), _) => match button.action() {
                        Some(action) => {
                            let action = action.clone();
                            tracing::debug!(?slot, ?action, "alert button tapped");
                            send(action);
                            Interaction::ButtonSent { slot }
                        }
                        None => {
                            tracing::debug!(?slot, "alert button without action tapped");
                            Interaction::ClosedWithoutAction { slot }
                        }
                    },
                    // Alerts without buttons are shown with a bare dismiss button.
                    (None, ButtonSlot::Primary) => Interaction::ClosedWithoutAction { slot },
                    (None, ButtonSlot::Secondary) => {
                        tracing::warn!("tap on a secondary button the alert does not have");
                        return None;
                    }
                }
            }
            DialogEvent::Dismissed => {
                tracing::debug!(action = ?self.on_dismiss, "alert dismissed by host");
                send(self.on_dismiss.clone());
                Interaction::DismissSent
            }
        };

        self.close();
        Some(interaction)
    }

    fn close(&mut self) {
        if let Presentation::Visible { alert, .. } =
            std::mem::replace(&mut self.presentation, Presentation::Hidden)
        {
            self.presentation = Presentation::Closed(alert);
        }
    }
}
