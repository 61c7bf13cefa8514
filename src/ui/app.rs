use crate::alert::Alert;
use crate::store::Store;
use crate::ui::alert::{
    AlertPresenter, ButtonLabels, DialogEvent, DialogSpec, Interaction, PresentationChange,
};
use crate::ui::demo::{DemoAction, DemoReducer, DemoState};
use crate::ui::input::{map_dialog_key, DialogFocus};
use crossterm::event::KeyEvent;

/// A named alert the user can open from the demo screen.
#[derive(Debug, Clone)]
pub struct Preset {
    pub name: String,
    pub alert: Alert<DemoAction>,
}

pub struct App {
    should_quit: bool,
    /// Screen state (MVI pattern), including the alert descriptor.
    store: Store<DemoReducer>,
    /// Binds `store.state().alert` to the dialog on screen.
    presenter: AlertPresenter<DemoAction>,
    /// Button focus of the visible dialog (host state, outside MVI).
    focus: DialogFocus,
    presets: Vec<Preset>,
}

impl App {
    /// Build the app from presets whose button actions are plain tags.
    pub fn new(presets: Vec<(String, Alert<String>)>, labels: ButtonLabels) -> Self {
        let presets = presets
            .into_iter()
            .map(|(name, alert)| Preset {
                name,
                alert: alert.map_action(DemoAction::Button),
            })
            .collect();
        Self {
            should_quit: false,
            store: Store::default(),
            presenter: AlertPresenter::with_labels(DemoAction::AlertDismissed, labels),
            focus: DialogFocus::default(),
            presets,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn state(&self) -> &DemoState {
        self.store.state()
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Dialog currently on screen.
    pub fn dialog(&self) -> Option<&DialogSpec> {
        self.presenter.dialog()
    }

    pub fn focus(&self) -> &DialogFocus {
        &self.focus
    }

    /// Open the preset at `index` (0-based). Returns false if there is none.
    pub fn open_preset(&mut self, index: usize) -> bool {
        let Some(preset) = self.presets.get(index) else {
            return false;
        };
        let action = DemoAction::Present(Box::new(preset.alert.clone()));
        self.store.send(action);
        self.sync();
        true
    }

    pub fn open_preset_by_name(&mut self, name: &str) -> bool {
        match self.presets.iter().position(|preset| preset.name == name) {
            Some(index) => self.open_preset(index),
            None => false,
        }
    }

    /// Key press while a dialog is visible.
    pub fn on_dialog_key(&mut self, key: KeyEvent) {
        let event = match self.presenter.dialog() {
            Some(spec) => map_dialog_key(key, spec, &mut self.focus),
            None => None,
        };
        if let Some(event) = event {
            self.on_dialog_event(event);
        }
    }

    /// The terminal lost focus: a system interruption of the dialog.
    pub fn on_focus_lost(&mut self) {
        if self.presenter.is_presenting() {
            self.on_dialog_event(DialogEvent::Dismissed);
        }
    }

    fn on_dialog_event(&mut self, event: DialogEvent) {
        let interaction = self.presenter.handle(event, self.store.sender());
        if let Some(Interaction::ClosedWithoutAction { .. }) = interaction {
            // Nothing was sent; clear the descriptor so the alert can be shown again.
            self.store.send(DemoAction::AlertCleared);
        }
        self.sync();
    }

    /// Re-observe the store after every state change.
    fn sync(&mut self) {
        match self.presenter.observe(&self.store.state().alert) {
            PresentationChange::Present(spec) => self.focus = DialogFocus::for_dialog(&spec),
            PresentationChange::Hide => self.focus = DialogFocus::default(),
            PresentationChange::Unchanged => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::{AlertDescriptor, Button};
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn make_app() -> App {
        let delete = Alert::with_buttons(
            "Delete",
            Some("Are you sure?".into()),
            Button::default("Confirm").send("confirm".to_string()),
            Button::cancel(),
        );
        let error = Alert::new(
            "Error",
            None,
            Some(Button::default("OK").send("ack".to_string())),
        );
        App::new(
            vec![("delete".into(), delete), ("error".into(), error)],
            ButtonLabels::default(),
        )
    }

    fn sent_entries(app: &App) -> Vec<&str> {
        app.state()
            .log
            .iter()
            .filter(|line| line.starts_with("sent:"))
            .map(String::as_str)
            .collect()
    }

    #[test]
    fn open_preset_presents_dialog() {
        let mut app = make_app();
        assert!(app.open_preset_by_name("delete"));
        assert_eq!(app.dialog().map(|d| d.title.as_str()), Some("Delete"));
        assert_eq!(app.focus().index(), 0);
    }

    #[test]
    fn unknown_preset_is_rejected() {
        let mut app = make_app();
        assert!(!app.open_preset_by_name("missing"));
        assert!(!app.open_preset(7));
        assert!(app.dialog().is_none());
    }

    #[test]
    fn confirm_sends_once_and_hides() {
        let mut app = make_app();
        app.open_preset(0);
        app.on_dialog_key(press(KeyCode::Enter));
        assert!(app.dialog().is_none());
        assert_eq!(app.state().alert, AlertDescriptor::Dismissed);
        app.on_dialog_key(press(KeyCode::Enter));
        assert_eq!(sent_entries(&app), vec!["sent: confirm"]);
    }

    #[test]
    fn cancel_without_action_sends_nothing_and_can_reopen() {
        let mut app = make_app();
        app.open_preset(0);
        app.on_dialog_key(press(KeyCode::Right));
        app.on_dialog_key(press(KeyCode::Enter));
        assert!(app.dialog().is_none());
        assert!(sent_entries(&app).is_empty());
        assert_eq!(app.state().alert, AlertDescriptor::Dismissed);

        assert!(app.open_preset(0));
        assert!(app.dialog().is_some());
    }

    #[test]
    fn focus_loss_dismisses_through_store() {
        let mut app = make_app();
        app.open_preset(1);
        app.on_focus_lost();
        assert!(app.dialog().is_none());
        assert_eq!(app.state().log.last().map(String::as_str), Some("dismissed"));
        app.on_focus_lost();
        let dismissals = app.state().log.iter().filter(|l| *l == "dismissed").count();
        assert_eq!(dismissals, 1);
    }
}
