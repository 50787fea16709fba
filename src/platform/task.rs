use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;

#[derive(Default)]
struct Slot {
    generation: u64,
    token: Option<CancellationToken>,
}

/// Hands out tickets for asynchronous requests of which only the newest may
/// land. Beginning a request cancels the one before it.
#[derive(Clone, Default)]
pub struct LatestRequest {
    slot: Arc<Mutex<Slot>>,
}

pub struct Ticket {
    generation: u64,
    token: CancellationToken,
    slot: Arc<Mutex<Slot>>,
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let token = CancellationToken::new();
        let (generation, previous) = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            (slot.generation, slot.token.replace(token.clone()))
        };
        if let Some(previous) = previous {
            previous.cancel();
        }
        Ticket {
            generation,
            token,
            slot: self.slot.clone(),
        }
    }

    pub fn cancel_all(&self) {
        let previous = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.token.take()
        };
        if let Some(previous) = previous {
            previous.cancel();
        }
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        !self.is_cancelled() && lock(&self.slot).generation == self.generation
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Drives `fut` unless the ticket is superseded first. `None` means the
    /// result is stale and must be dropped.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            output = fut => self.is_current().then_some(output),
        }
    }
}
