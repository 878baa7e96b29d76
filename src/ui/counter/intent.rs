//! Intents for the counter slice.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the counter store.
///
/// The fetch transition is split into its three phases. Only
/// `FetchStarted` is dispatched by the caller; the resolved and rejected
/// phases are posted back by the task that performs the network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    Increment,
    Decrement,

    /// A fetch was issued and has not settled yet.
    FetchStarted,

    /// The counting service answered with `delta`.
    FetchResolved { delta: i64 },

    /// The fetch failed (transport, HTTP status, or payload).
    FetchRejected,
}

impl Intent for CounterIntent {}
