//! Owned state container for a single reducer.

use std::marker::PhantomData;

use tokio::sync::watch;

use super::reducer::Reducer;

/// Holds the current state of one slice and applies intents through `R`.
///
/// The store is constructed once and passed by reference to its consumers.
/// Reads go through [`Store::state`], writes through [`Store::dispatch`],
/// and observers that live outside the owner's borrow (render loop, tests)
/// watch for changes through [`Store::subscribe`].
pub struct Store<R: Reducer> {
    state: R::State,
    publisher: watch::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    pub fn new(initial: R::State) -> Self {
        let (publisher, _) = watch::channel(initial.clone());
        Self {
            state: initial,
            publisher,
            _reducer: PhantomData,
        }
    }

    /// Current state.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Receiver that is notified whenever a dispatch changes the state.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.publisher.subscribe()
    }

    /// Reduce `intent` into the current state.
    ///
    /// Subscribers are only notified when the resulting state differs.
    pub fn dispatch(&mut self, intent: R::Intent) {
        let next = R::reduce(self.state.clone(), intent);
        if next == self.state {
            return;
        }
        self.state = next;
        self.publisher.send_replace(self.state.clone());
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new(R::State::default())
    }
}
