//! Type-safe key bindings with help metadata.
//!
//! Each [`Binding`] pairs the key presses that trigger an action with the
//! text the help bar shows for it. Bindings can be disabled so
//! context-dependent keys (stopwatch controls on the clock tab, say) drop
//! out of both matching and help.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A concrete key press: a code plus its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default)]
pub struct Help {
    pub key: String,
    pub desc: String,
}

#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// True when the pressed key triggers this binding. Disabled bindings
    /// never match.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        !self.disabled
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.modifiers == msg.modifiers)
    }

    pub fn help(&self) -> &Help {
        &self.help
    }

    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Implemented by anything whose bindings the help bar can render.
pub trait KeyMap {
    /// The bindings shown in the one-line help view, in display order.
    fn short_help(&self) -> Vec<&Binding>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn matches_any_listed_key() {
        let binding =
            Binding::new(vec![KeyCode::Char(' '), KeyCode::Enter]).with_help("space", "start");
        assert!(binding.matches(&press(KeyCode::Char(' '))));
        assert!(binding.matches(&press(KeyCode::Enter)));
        assert!(!binding.matches(&press(KeyCode::Char('q'))));
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let binding = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(binding.matches(&KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        }));
        assert!(!binding.matches(&press(KeyCode::Char('c'))));
    }

    #[test]
    fn disabled_bindings_never_match() {
        let mut binding = Binding::new(vec![KeyCode::Char('r')]).with_help("r", "reset");
        binding.set_enabled(false);
        assert!(!binding.matches(&press(KeyCode::Char('r'))));
        assert!(!binding.enabled());

        binding.set_enabled(true);
        assert!(binding.matches(&press(KeyCode::Char('r'))));
    }

    #[test]
    fn help_text_round_trips() {
        let binding = Binding::new(vec![KeyCode::Tab]).with_help("tab", "next field");
        assert_eq!(binding.help().key, "tab");
        assert_eq!(binding.help().desc, "next field");
    }
}
