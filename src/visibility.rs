use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

/// Window-system side of the floating surface.
///
/// `set_visible(true)` shows the floating window(s), `set_visible(false)`
/// hides them. Implementations must accept the same value repeatedly.
///
/// Calls arrive while the override lock is held. An implementation may read
/// `Floating::is_overridden`, but calling `override_on`, `override_off` or
/// `override_toggle` on the same `Floating` from here deadlocks.
pub trait VisibilityBackend: Send + Sync {
    fn set_visible(&self, visible: bool) -> anyhow::Result<()>;
}

impl<F> VisibilityBackend for F
where
    F: Fn(bool) -> anyhow::Result<()> + Send + Sync,
{
    fn set_visible(&self, visible: bool) -> anyhow::Result<()> {
        self(visible)
    }
}

/// Mirrors requested visibility into a shared flag which the render loop
/// polls to show or hide its viewport.
#[derive(Clone, Default)]
pub struct FlagBackend {
    visible: Arc<AtomicBool>,
}

impl FlagBackend {
    pub fn new(visible: Arc<AtomicBool>) -> Self {
        Self { visible }
    }

    pub fn flag(&self) -> Arc<AtomicBool> {
        self.visible.clone()
    }

    pub fn is_visible(&self) -> bool {
        self.visible.load(Ordering::SeqCst)
    }
}

impl VisibilityBackend for FlagBackend {
    fn set_visible(&self, visible: bool) -> anyhow::Result<()> {
        let old = self.visible.swap(visible, Ordering::SeqCst);
        tracing::debug!(from=?old, to=?visible, "visibility updated");
        Ok(())
    }
}
