//! Shared test utilities: a small feature with an alert in its state.

#![allow(dead_code, unused_imports)]

use alertkit::alert::AlertDescriptor;
use alertkit::store::Store;
use alertkit::ui::alert::{AlertPresenter, DialogEvent, Interaction};
use alertkit::ui::mvi::{Action, Reducer, UiState};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileAction {
    /// Reducer trigger: ask before deleting.
    DeleteTapped,
    /// Reducer trigger: report a failure.
    SaveFailed,
    /// Reducer trigger: arbitrary alert.
    Show(Box<AlertDescriptor<FileAction>>),
    Confirm,
    Ack,
    AlertDismissed,
    /// Host reset after a button without an action closed the dialog.
    AlertCleared,
}

impl Action for FileAction {}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileState {
    pub alert: AlertDescriptor<FileAction>,
    pub deleted: u32,
    pub acknowledged: u32,
    pub dismissals: u32,
}

impl UiState for FileState {}

pub struct FileReducer;

impl Reducer for FileReducer {
    type State = FileState;
    type Action = FileAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        use alertkit::alert::Button;

        match action {
            FileAction::DeleteTapped => {
                state.alert = AlertDescriptor::shown_with_buttons(
                    "Delete",
                    Some("Are you sure?".into()),
                    Button::default("Confirm").send(FileAction::Confirm),
                    Button::cancel(),
                );
            }
            FileAction::SaveFailed => {
                state.alert = AlertDescriptor::shown(
                    "Error",
                    None,
                    Some(Button::default("OK").send(FileAction::Ack)),
                );
            }
            FileAction::Show(alert) => state.alert = *alert,
            FileAction::Confirm => {
                state.deleted += 1;
                state.alert = AlertDescriptor::Dismissed;
            }
            FileAction::Ack => {
                state.acknowledged += 1;
                state.alert = AlertDescriptor::Dismissed;
            }
            FileAction::AlertDismissed => {
                state.dismissals += 1;
                state.alert = AlertDescriptor::Dismissed;
            }
            FileAction::AlertCleared => state.alert = AlertDescriptor::Dismissed,
        }
        state
    }
}

/// Store plus presenter, wired the way a view layer would wire them.
pub struct Harness {
    pub store: Store<FileReducer>,
    pub presenter: AlertPresenter<FileAction>,
    /// Every action the presenter sent, in order.
    pub sent: Vec<FileAction>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            store: Store::default(),
            presenter: AlertPresenter::new(FileAction::AlertDismissed),
            sent: Vec::new(),
        }
    }

    /// Send an application action and let the view observe the result.
    pub fn dispatch(&mut self, action: FileAction) {
        self.store.send(action);
        self.presenter.observe(&self.store.state().alert);
    }

    /// Deliver a host event, forwarding sends to the store.
    ///
    /// A close without an action sends nothing, so the host clears the alert.
    pub fn event(&mut self, event: DialogEvent) -> Option<Interaction> {
        let store = &mut self.store;
        let sent = &mut self.sent;
        let interaction = self.presenter.handle(event, |action| {
            sent.push(action.clone());
            store.send(action);
        });
        if let Some(Interaction::ClosedWithoutAction { .. }) = interaction {
            self.store.send(FileAction::AlertCleared);
        }
        self.presenter.observe(&self.store.state().alert);
        interaction
    }
}
