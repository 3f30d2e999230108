use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::visibility::VisibilityBackend;

/// Persistent pinned-visibility intent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityIntent {
    /// `true` pins the floating windows visible, `false` pins them hidden.
    pub active: bool,
    /// Set once the first mutating call has reset the window to hidden.
    pub initialized: bool,
}

/// Owns the user's pinned visibility and applies it to the backend.
///
/// Nothing is sent to the backend until the first `set`/`toggle`. That first
/// call always hides the window before applying the requested value, so the
/// controller starts from a known baseline whatever the window system was
/// doing before. A first request to hide is satisfied by that reset alone.
/// Each mutation holds the state lock for the duration of its side effects.
/// `get` reads a lock-free copy of the pinned flag, so a backend may query it
/// while being driven by the controller.
pub struct OverrideController {
    intent: Mutex<VisibilityIntent>,
    pinned: AtomicBool,
    backend: Arc<dyn VisibilityBackend>,
}

impl OverrideController {
    pub fn new(backend: Arc<dyn VisibilityBackend>) -> Self {
        Self {
            intent: Mutex::new(VisibilityIntent::default()),
            pinned: AtomicBool::new(false),
            backend,
        }
    }

    pub fn get(&self) -> bool {
        self.pinned.load(Ordering::SeqCst)
    }

    pub fn intent(&self) -> VisibilityIntent {
        *self.lock()
    }

    pub fn set(&self, value: bool) -> anyhow::Result<()> {
        let mut intent = self.lock();
        self.apply(&mut intent, value)
    }

    /// Flip the pinned state and return the new value.
    pub fn toggle(&self) -> anyhow::Result<bool> {
        let mut intent = self.lock();
        let next = !intent.active;
        self.apply(&mut intent, next)?;
        Ok(next)
    }

    /// Hide the window unless it is pinned visible. Returns whether the hide
    /// was issued. The check and the hide happen under the same lock as
    /// `set`, so a concurrent pin cannot slip in between them.
    pub fn hide_unless_pinned(&self) -> anyhow::Result<bool> {
        let intent = self.lock();
        if intent.active {
            tracing::debug!("override active; skipping timed hide");
            return Ok(false);
        }
        self.backend.set_visible(false)?;
        Ok(true)
    }

    fn apply(&self, intent: &mut VisibilityIntent, value: bool) -> anyhow::Result<()> {
        if !intent.initialized {
            tracing::debug!("first override change; resetting floating window to hidden");
            intent.active = false;
            self.pinned.store(false, Ordering::SeqCst);
            self.backend.set_visible(false)?;
            intent.initialized = true;
            if !value {
                // the reset already applied the requested state
                return Ok(());
            }
        }
        let old = intent.active;
        intent.active = value;
        self.pinned.store(value, Ordering::SeqCst);
        tracing::debug!(from=?old, to=?value, "override updated");
        self.backend.set_visible(value)
    }

    fn lock(&self) -> MutexGuard<'_, VisibilityIntent> {
        self.intent.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
