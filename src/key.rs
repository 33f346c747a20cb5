//! Key bindings and help metadata.
//!
//! A [`Binding`] groups one or more physical key presses under a single
//! semantic action and carries the short help text shown in the footer.
//! Components expose their bindings through the [`KeyMap`] trait so the help
//! line can be assembled from whatever is currently relevant.
//!
//! ```rust
//! use dofu_choose::key::{Binding, KeyPress};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//! assert!(confirm.matches_press(&KeyPress::from(KeyCode::Enter)));
//!
//! let quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+c", "quit");
//! assert!(!quit.matches_press(&KeyPress::from(KeyCode::Char('c'))));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single physical key press: a key code plus its modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key that was pressed.
    pub code: KeyCode,
    /// Modifiers held while pressing it.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Creates a key press from a code and modifiers.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Returns true when this press would insert text into an editor.
    pub fn is_printable(&self) -> bool {
        matches!(self.code, KeyCode::Char(_))
            && !self
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self::new(code, modifiers)
    }
}

impl From<&KeyMsg> for KeyPress {
    fn from(msg: &KeyMsg) -> Self {
        Self::new(msg.key, msg.modifiers)
    }
}

/// Help text for a binding, e.g. `("enter", "confirm")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// How the key is displayed.
    pub key: String,
    /// What the key does.
    pub desc: String,
}

/// A set of key presses mapped to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from anything convertible to [`KeyPress`].
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match and are
    /// left out of help output.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding is active and has at least one key.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Matches a press. SHIFT is ignored for character keys since the shifted
    /// character is already encoded in the code.
    pub fn matches_press(&self, press: &KeyPress) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|k| {
            if k.code != press.code {
                return false;
            }
            match press.code {
                KeyCode::Char(_) => {
                    let mask = KeyModifiers::CONTROL | KeyModifiers::ALT;
                    (k.modifiers & mask) == (press.modifiers & mask)
                }
                _ => k.modifiers == press.modifiers,
            }
        })
    }
}

/// Builds a binding from string key names, see [`with_keys_str`].
pub fn new_binding(keys: &[&str]) -> Binding {
    Binding::new(with_keys_str(keys))
}

/// Parses key names such as `"ctrl+c"`, `"tab"`, `"space"`, `"pgdown"` or
/// `"/"`. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> Vec<KeyPress> {
    keys.iter().filter_map(|k| parse_key(k)).collect()
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = s;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            modifiers |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            modifiers |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            modifiers |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "enter" => KeyCode::Enter,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" | " " => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress::new(code, modifiers))
}

/// Implemented by components that publish their bindings for help output.
pub trait KeyMap {
    /// Bindings for the one-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help, grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_keys() {
        let presses = with_keys_str(&["ctrl+c", "tab", "space", "/", "bogus-key"]);
        assert_eq!(
            presses,
            vec![
                KeyPress::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                KeyPress::from(KeyCode::Tab),
                KeyPress::from(KeyCode::Char(' ')),
                KeyPress::from(KeyCode::Char('/')),
            ]
        );
    }

    #[test]
    fn test_char_match_ignores_shift() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches_press(&KeyPress::new(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(!b.matches_press(&KeyPress::new(KeyCode::Char('G'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let b = new_binding(&["ctrl+c"]);
        assert!(b.matches_press(&KeyPress::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches_press(&KeyPress::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "ok");
        b.set_enabled(false);
        assert!(!b.enabled());
        assert!(!b.matches_press(&KeyPress::from(KeyCode::Enter)));
        assert_eq!(b.help().desc, "ok");
    }

    #[test]
    fn test_printable() {
        assert!(KeyPress::from(KeyCode::Char(' ')).is_printable());
        assert!(!KeyPress::new(KeyCode::Char('c'), KeyModifiers::CONTROL).is_printable());
        assert!(!KeyPress::from(KeyCode::Tab).is_printable());
    }
}
