use std::sync::Arc;

use crate::delay::Delay;
use crate::error::Result;
use crate::override_state::OverrideController;
use crate::timer::{PendingTimeout, ResettableTimer};
use crate::visibility::VisibilityBackend;

/// Control surface for one floating visibility channel, meant to be driven
/// from hotkey actions.
pub struct Floating {
    backend: Arc<dyn VisibilityBackend>,
    overrides: Arc<OverrideController>,
    timer: ResettableTimer,
}

impl Floating {
    pub fn new(backend: Arc<dyn VisibilityBackend>, delay: Arc<dyn Delay>) -> Self {
        Self {
            overrides: Arc::new(OverrideController::new(backend.clone())),
            timer: ResettableTimer::new(delay),
            backend,
        }
    }

    /// Show immediately. Leaves override and timer state alone.
    pub fn show(&self) -> Result<()> {
        self.backend.set_visible(true)?;
        Ok(())
    }

    /// Hide immediately. Leaves override and timer state alone.
    pub fn hide(&self) -> Result<()> {
        self.backend.set_visible(false)?;
        Ok(())
    }

    pub fn override_on(&self) -> Result<()> {
        self.overrides.set(true)?;
        Ok(())
    }

    pub fn override_off(&self) -> Result<()> {
        self.overrides.set(false)?;
        Ok(())
    }

    pub fn override_toggle(&self) -> Result<bool> {
        Ok(self.overrides.toggle()?)
    }

    pub fn is_overridden(&self) -> bool {
        self.overrides.get()
    }

    /// Hide after `delay_ms` unless the window is pinned visible by then, or
    /// another call to this method is made first.
    pub fn hide_after_timeout(&self, delay_ms: i64) -> Result<PendingTimeout> {
        let overrides = self.overrides.clone();
        self.timer
            .schedule(delay_ms, move || overrides.hide_unless_pinned())
    }

    pub fn overrides(&self) -> &OverrideController {
        &self.overrides
    }

    pub fn timer(&self) -> &ResettableTimer {
        &self.timer
    }
}
