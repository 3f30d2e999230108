use std::thread;
use std::time::{Duration, Instant};

// How often `ThreadSleep` checks whether a wait is still wanted.
const POLL_SLICE: Duration = Duration::from_millis(20);

/// Suspends the calling flow for roughly `ms` milliseconds.
///
/// An error means the wait was interrupted and whatever was waiting on it
/// should be abandoned.
pub trait Delay: Send + Sync {
    fn delay(&self, ms: u64) -> anyhow::Result<()>;

    /// Like [`Delay::delay`], but may return early once `stale` reports
    /// `true`. The default waits the full delay.
    fn delay_unless(&self, ms: u64, stale: &dyn Fn() -> bool) -> anyhow::Result<()> {
        let _ = stale;
        self.delay(ms)
    }
}

/// Blocks the current thread with [`thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn delay(&self, ms: u64) -> anyhow::Result<()> {
        if ms == 0 {
            // still give concurrently issued timeouts a chance to run first
            thread::yield_now();
        } else {
            thread::sleep(Duration::from_millis(ms));
        }
        Ok(())
    }

    fn delay_unless(&self, ms: u64, stale: &dyn Fn() -> bool) -> anyhow::Result<()> {
        if ms == 0 {
            return self.delay(0);
        }
        let deadline = Instant::now() + Duration::from_millis(ms);
        loop {
            let now = Instant::now();
            if now >= deadline || stale() {
                return Ok(());
            }
            thread::sleep((deadline - now).min(POLL_SLICE));
        }
    }
}
