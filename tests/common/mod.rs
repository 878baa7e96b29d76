//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_counter;

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tally::fetch::{CountSource, FetchError};
use tokio::sync::oneshot;

/// Outcome a [`ScriptedSource`] hands out for one call.
pub enum Scripted {
    Delta(i64),
    Fail,
    /// Settle only when the paired sender fires (failing if it is dropped).
    Gate(oneshot::Receiver<i64>),
}

/// Count source whose answers are queued up front by the test.
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    amounts: Arc<Mutex<Vec<u32>>>,
}

impl ScriptedSource {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            amounts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Amounts received so far, in call order.
    pub fn amounts(&self) -> Vec<u32> {
        self.amounts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CountSource for ScriptedSource {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_delta(&self, amount: u32) -> Result<i64, FetchError> {
        self.amounts.lock().unwrap().push(amount);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Delta(delta)) => Ok(delta),
            Some(Scripted::Gate(rx)) => rx
                .await
                .map_err(|_| FetchError::Payload("gate dropped".to_string())),
            Some(Scripted::Fail) | None => Err(FetchError::Status {
                status: 503,
                body: "scripted failure".to_string(),
            }),
        }
    }
}

pub const RECV_TIMEOUT: Duration = Duration::from_secs(5);
