use std::fmt;
use std::str::FromStr;

use crate::error::{FloatError, Result};
use crate::floating::Floating;
use crate::hotkey::{parse_hotkey, Hotkey};
use crate::settings::Settings;
use crate::timer::PendingTimeout;

const PREFIX: &str = "float:";

/// Something a hotkey can ask the floating window to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatAction {
    Show,
    Hide,
    OverrideOn,
    OverrideOff,
    OverrideToggle,
    Status,
    /// Timed hide. `None` uses the configured default delay.
    HideAfter(Option<i64>),
}

impl FromStr for FloatAction {
    type Err = FloatError;

    fn from_str(s: &str) -> Result<Self> {
        let unknown = || FloatError::UnknownAction(s.to_string());
        let rest = s.trim().strip_prefix(PREFIX).ok_or_else(unknown)?;
        let action = match rest {
            "show" => FloatAction::Show,
            "hide" => FloatAction::Hide,
            "pin" => FloatAction::OverrideOn,
            "unpin" => FloatAction::OverrideOff,
            "toggle" => FloatAction::OverrideToggle,
            "status" => FloatAction::Status,
            "hide_after" => FloatAction::HideAfter(None),
            _ => {
                let ms = rest.strip_prefix("hide_after:").ok_or_else(unknown)?;
                FloatAction::HideAfter(Some(ms.trim().parse().map_err(|_| unknown())?))
            }
        };
        Ok(action)
    }
}

impl fmt::Display for FloatAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FloatAction::Show => write!(f, "{PREFIX}show"),
            FloatAction::Hide => write!(f, "{PREFIX}hide"),
            FloatAction::OverrideOn => write!(f, "{PREFIX}pin"),
            FloatAction::OverrideOff => write!(f, "{PREFIX}unpin"),
            FloatAction::OverrideToggle => write!(f, "{PREFIX}toggle"),
            FloatAction::Status => write!(f, "{PREFIX}status"),
            FloatAction::HideAfter(None) => write!(f, "{PREFIX}hide_after"),
            FloatAction::HideAfter(Some(ms)) => write!(f, "{PREFIX}hide_after:{ms}"),
        }
    }
}

#[derive(Debug)]
pub enum ActionOutcome {
    /// An immediate show or hide was issued.
    Done,
    /// Current pinned state after the action.
    Pinned(bool),
    Scheduled(PendingTimeout),
}

pub fn dispatch(action: FloatAction, floating: &Floating, default_timeout_ms: i64) -> Result<ActionOutcome> {
    tracing::debug!(%action, "dispatching");
    let outcome = match action {
        FloatAction::Show => {
            floating.show()?;
            ActionOutcome::Done
        }
        FloatAction::Hide => {
            floating.hide()?;
            ActionOutcome::Done
        }
        FloatAction::OverrideOn => {
            floating.override_on()?;
            ActionOutcome::Pinned(true)
        }
        FloatAction::OverrideOff => {
            floating.override_off()?;
            ActionOutcome::Pinned(false)
        }
        FloatAction::OverrideToggle => ActionOutcome::Pinned(floating.override_toggle()?),
        FloatAction::Status => ActionOutcome::Pinned(floating.is_overridden()),
        FloatAction::HideAfter(ms) => {
            ActionOutcome::Scheduled(floating.hide_after_timeout(ms.unwrap_or(default_timeout_ms))?)
        }
    };
    Ok(outcome)
}

/// Hotkey to action lookup built from the configured bindings.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    entries: Vec<(Hotkey, FloatAction)>,
}

impl Keymap {
    /// Bindings with an unparsable hotkey or action are skipped.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut entries = Vec::new();
        for binding in &settings.bindings {
            let Some(hotkey) = parse_hotkey(&binding.hotkey) else {
                tracing::warn!("binding hotkey '{}' is invalid; ignoring", binding.hotkey);
                continue;
            };
            match binding.action.parse::<FloatAction>() {
                Ok(action) => entries.push((hotkey, action)),
                Err(e) => tracing::warn!("binding for '{}' ignored: {e}", binding.hotkey),
            }
        }
        Self { entries }
    }

    pub fn lookup(&self, hotkey: &Hotkey) -> Option<FloatAction> {
        self.entries
            .iter()
            .find(|(key, _)| key == hotkey)
            .map(|(_, action)| *action)
    }

    /// Resolve typed input such as `shift+f9` against the bindings.
    pub fn resolve(&self, input: &str) -> Option<FloatAction> {
        self.lookup(&parse_hotkey(input)?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
