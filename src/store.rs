//! Minimal store: owns the state and routes every action through a reducer.
//!
//! This is the collaborator the alert presenter talks to. Views read
//! [`Store::state`] and report interactions through [`Store::send`]; nothing
//! else mutates the state.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

pub struct Store<R: Reducer> {
    state: R::State,
    revision: u64,
    _reducer: PhantomData<R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        Self {
            state: initial,
            revision: 0,
            _reducer: PhantomData,
        }
    }

    /// Current state (read-only).
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Number of actions processed so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Run an action through the reducer and store the result.
    pub fn send(&mut self, action: R::Action) {
        tracing::debug!(?action, revision = self.revision, "store send");
        self.state = R::reduce(std::mem::take(&mut self.state), action);
        self.revision += 1;
    }

    /// Borrow the store as a `send` callback.
    pub fn sender(&mut self) -> impl FnMut(R::Action) + '_ {
        move |action| self.send(action)
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
