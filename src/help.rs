//! A one-line help bar generated from a key map.
//!
//! Renders "key action • key action • …" from whatever bindings the active
//! view reports, skipping disabled ones and truncating with an ellipsis when
//! the terminal is too narrow.

use crate::key::{Binding, KeyMap};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

const SEPARATOR: &str = " • ";
const ELLIPSIS: &str = "…";

/// Styles for the pieces of the help line.
#[derive(Debug, Clone)]
pub struct Styles {
    pub key: Style,
    pub desc: Style,
    pub separator: Style,
}

impl Default for Styles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let key = Style::new().foreground(AdaptiveColor {
            Light: "#909090",
            Dark: "#626262",
        });
        let desc = Style::new().foreground(AdaptiveColor {
            Light: "#B2B2B2",
            Dark: "#4A4A4A",
        });
        let separator = Style::new().foreground(AdaptiveColor {
            Light: "#DDDADA",
            Dark: "#3C3C3C",
        });
        Self {
            key,
            desc,
            separator,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Model {
    pub styles: Styles,
    /// Maximum rendered width; 0 means unconstrained.
    pub width: usize,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the help line for a key map's short help.
    pub fn view<K: KeyMap>(&self, keymap: &K) -> String {
        self.render(keymap.short_help())
    }

    fn render(&self, bindings: Vec<&Binding>) -> String {
        let separator = self
            .styles
            .separator
            .clone()
            .inline(true)
            .render(SEPARATOR);
        let ellipsis = self.styles.separator.clone().inline(true).render(ELLIPSIS);

        let mut line = String::new();
        let mut total_width = 0;

        for binding in bindings {
            if !binding.enabled() || binding.help().key.is_empty() {
                continue;
            }

            let sep = if total_width > 0 { separator.as_str() } else { "" };
            let key = self
                .styles
                .key
                .clone()
                .inline(true)
                .render(&binding.help().key);
            let desc = self
                .styles
                .desc
                .clone()
                .inline(true)
                .render(&binding.help().desc);
            let item = format!("{}{} {}", sep, key, desc);

            let item_width = lipgloss::width_visible(&item);
            if self.width > 0 && total_width + item_width > self.width {
                line.push_str(&ellipsis);
                break;
            }

            total_width += item_width;
            line.push_str(&item);
        }

        line
    }
}
