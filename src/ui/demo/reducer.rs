//! Reducer for the demo screen.

use crate::alert::AlertDescriptor;
use crate::ui::mvi::Reducer;

use super::action::DemoAction;
use super::state::DemoState;

pub struct DemoReducer;

impl Reducer for DemoReducer {
    type State = DemoState;
    type Action = DemoAction;

    fn reduce(mut state: Self::State, action: Self::Action) -> Self::State {
        match action {
            DemoAction::Present(alert) => {
                state.push_log(format!("shown: {}", alert.title()));
                state.alert = (*alert).into();
            }
            DemoAction::Button(tag) => {
                state.push_log(format!("sent: {}", tag));
                state.alert = AlertDescriptor::Dismissed;
            }
            DemoAction::AlertDismissed => {
                state.push_log("dismissed".to_string());
                state.alert = AlertDescriptor::Dismissed;
            }
            DemoAction::AlertCleared => {
                state.alert = AlertDescriptor::Dismissed;
            }
        }
        state
    }
}
