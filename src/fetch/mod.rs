//! Counting service collaborator.
//!
//! The store never performs I/O itself. A [`CountSource`] is asked for a
//! delta and either resolves with it or fails with a [`FetchError`]; the
//! UI layer turns that outcome into the resolved or rejected phase.

mod client;
mod error;

pub use client::{CountSource, HttpCountSource};
pub use error::FetchError;
