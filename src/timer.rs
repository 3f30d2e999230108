use std::sync::{Arc, atomic::{AtomicU64, Ordering}};
use std::thread::{self, JoinHandle};

use crate::delay::Delay;
use crate::error::{FloatError, Result};

/// How a scheduled timeout ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutOutcome {
    /// Still the latest call when the delay elapsed and the action took effect.
    Fired,
    /// Still the latest call, but the action chose not to act.
    Suppressed,
    /// A newer call was scheduled while this one was waiting.
    Superseded,
    /// The delay was interrupted, so the action never ran.
    Abandoned,
    /// The action ran and its capability failed. Nobody waits on a timeout,
    /// so the error is only logged.
    Failed,
}

/// Handle to one scheduled timeout. Dropping it detaches the timeout.
#[derive(Debug)]
pub struct PendingTimeout {
    token: u64,
    handle: JoinHandle<TimeoutOutcome>,
}

impl PendingTimeout {
    /// Generation token captured when this timeout was scheduled.
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the timeout to settle.
    pub fn join(self) -> TimeoutOutcome {
        self.handle.join().unwrap_or(TimeoutOutcome::Abandoned)
    }
}

/// Runs an action after a delay, where each new call invalidates the effect
/// of every call still waiting.
///
/// Every call waits its own full delay on its own thread. When it wakes it
/// compares its token with the current generation and only acts if no newer
/// call has been made in the meantime. A [`Delay`] that honours
/// [`Delay::delay_unless`] releases a superseded call's thread early instead
/// of holding it for the whole original delay.
pub struct ResettableTimer {
    generation: Arc<AtomicU64>,
    delay: Arc<dyn Delay>,
}

impl ResettableTimer {
    pub fn new(delay: Arc<dyn Delay>) -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            delay,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Schedule `action` to run after `delay_ms` unless superseded.
    ///
    /// `action` returns whether it performed its effect.
    pub fn schedule<F>(&self, delay_ms: i64, action: F) -> Result<PendingTimeout>
    where
        F: FnOnce() -> anyhow::Result<bool> + Send + 'static,
    {
        let ms = u64::try_from(delay_ms).map_err(|_| FloatError::InvalidArgument { delay_ms })?;
        let token = self.generation.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        let generation = self.generation.clone();
        let delay = self.delay.clone();
        tracing::debug!(token, ms, "scheduling timeout");

        let handle = thread::Builder::new()
            .name(format!("float-timeout-{token}"))
            .spawn(move || {
                let stale = || generation.load(Ordering::SeqCst) != token;
                if let Err(e) = delay.delay_unless(ms, &stale) {
                    tracing::warn!(token, "timeout delay interrupted: {e:#}");
                    return TimeoutOutcome::Abandoned;
                }
                let current = generation.load(Ordering::SeqCst);
                if current != token {
                    tracing::debug!(token, current, "timeout superseded");
                    return TimeoutOutcome::Superseded;
                }
                match action() {
                    Ok(true) => TimeoutOutcome::Fired,
                    Ok(false) => TimeoutOutcome::Suppressed,
                    Err(e) => {
                        tracing::warn!(token, "timeout action failed: {e:#}");
                        TimeoutOutcome::Failed
                    }
                }
            })
            .map_err(FloatError::Spawn)?;

        Ok(PendingTimeout { token, handle })
    }
}
