use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    /// Canonical upper-case key name, e.g. `F9`, `SPACE` or `K`.
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub win: bool,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "Ctrl+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.win {
            write!(f, "Win+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Parse a hotkey string like "Ctrl+Shift+F9" into a [`Hotkey`].
///
/// Modifiers may appear in any order and case. Exactly one non-modifier key
/// is required.
pub fn parse_hotkey(s: &str) -> Option<Hotkey> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut win = false;
    let mut key: Option<String> = None;

    for part in s.split('+') {
        let upper = part.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "SHIFT" => shift = true,
            "ALT" => alt = true,
            "WIN" | "SUPER" | "META" => win = true,
            "" => {}
            _ => {
                if key.is_some() {
                    return None;
                }
                key = Some(parse_key(&upper)?);
            }
        }
    }

    key.map(|key| Hotkey {
        key,
        ctrl,
        shift,
        alt,
        win,
    })
}

fn parse_key(upper: &str) -> Option<String> {
    let named = match upper {
        "SPACE" => "SPACE",
        "TAB" => "TAB",
        "ENTER" | "RETURN" => "ENTER",
        "ESC" | "ESCAPE" => "ESCAPE",
        "DELETE" => "DELETE",
        "BACKSPACE" => "BACKSPACE",
        "CAPSLOCK" => "CAPSLOCK",
        "HOME" => "HOME",
        "END" => "END",
        "PAGEUP" => "PAGEUP",
        "PAGEDOWN" => "PAGEDOWN",
        "LEFT" | "LEFTARROW" => "LEFT",
        "RIGHT" | "RIGHTARROW" => "RIGHT",
        "UP" | "UPARROW" => "UP",
        "DOWN" | "DOWNARROW" => "DOWN",
        _ if upper.len() > 1 && upper.starts_with('F') => {
            return match upper[1..].parse::<u8>().ok() {
                Some(n @ 1..=24) => Some(format!("F{n}")),
                _ => None,
            };
        }
        _ => {
            let mut chars = upper.chars();
            return match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphanumeric() => Some(c.to_string()),
                _ => None,
            };
        }
    };
    Some(named.to_string())
}
