use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One hotkey bound to an action string such as `float:toggle`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Binding {
    pub hotkey: String,
    pub action: String,
}

impl Binding {
    pub fn new(hotkey: &str, action: &str) -> Self {
        Self {
            hotkey: hotkey.into(),
            action: action.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Also write log output to this file.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    /// Delay used by `float:hide_after` when no explicit delay is given.
    #[serde(default = "default_hide_timeout")]
    pub hide_timeout_ms: i64,
    #[serde(default = "default_bindings")]
    pub bindings: Vec<Binding>,
}

fn default_hide_timeout() -> i64 {
    1500
}

fn default_bindings() -> Vec<Binding> {
    vec![
        Binding::new("F9", "float:toggle"),
        Binding::new("Shift+F9", "float:show"),
        Binding::new("F10", "float:hide_after"),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            hide_timeout_ms: default_hide_timeout(),
            bindings: default_bindings(),
        }
    }
}

impl Settings {
    /// A missing or empty file yields the defaults. Any other read failure,
    /// including non-UTF-8 content, is an error.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(anyhow::Error::new(e).context(format!("reading settings from {path}"))),
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
