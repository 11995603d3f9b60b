use std::collections::HashSet;

use iocraft::prelude::{KeyCode, KeyEventKind, KeyModifiers};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Config types
// ---------------------------------------------------------------------------

/// A single key binding: maps a key chord to a built-in action.
#[derive(Debug, Clone, Deserialize)]
pub struct Keybinding {
    pub key: String,
    pub builtin: String,
    pub name: Option<String>,
}

/// All keybinding overrides from the config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub universal: Vec<Keybinding>,
    pub table: Vec<Keybinding>,
}

/// Action identifier used for dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinAction {
    // Universal
    MoveDown,
    MoveUp,
    First,
    Last,
    PageDown,
    PageUp,
    ToggleHelp,
    Quit,
    // Table
    ToggleRow,
    ToggleAll,
    ClearSelection,
}

impl BuiltinAction {
    /// Parse a builtin action name from the config string.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "move_down" => Self::MoveDown,
            "move_up" => Self::MoveUp,
            "first" => Self::First,
            "last" => Self::Last,
            "page_down" => Self::PageDown,
            "page_up" => Self::PageUp,
            "toggle_help" => Self::ToggleHelp,
            "quit" => Self::Quit,
            "toggle_row" => Self::ToggleRow,
            "toggle_all" => Self::ToggleAll,
            "clear_selection" => Self::ClearSelection,
            _ => return None,
        })
    }

    /// Human-readable description (for the help overlay).
    pub fn description(self) -> &'static str {
        match self {
            Self::MoveDown => "Move cursor down",
            Self::MoveUp => "Move cursor up",
            Self::First => "Jump to first issue",
            Self::Last => "Jump to last issue",
            Self::PageDown => "Page down",
            Self::PageUp => "Page up",
            Self::ToggleHelp => "Toggle help",
            Self::Quit => "Quit",
            Self::ToggleRow => "Toggle issue under cursor",
            Self::ToggleAll => "Select / deselect all open issues",
            Self::ClearSelection => "Clear selection",
        }
    }
}

// ---------------------------------------------------------------------------
// Key string conversion
// ---------------------------------------------------------------------------

/// Convert a key event to our canonical key string format.
///
/// Examples: `"j"`, `"G"`, `"ctrl+c"`, `"alt+d"`, `"enter"`, `"space"`,
/// `"pagedown"`, `"up"`, `"?"`.
pub fn key_event_to_string(
    code: KeyCode,
    modifiers: KeyModifiers,
    kind: KeyEventKind,
) -> Option<String> {
    if kind == KeyEventKind::Release {
        return None;
    }

    let base = match code {
        KeyCode::Char(' ') => "space".to_owned(),
        // ctrl+<char> is always lowercase.
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::CONTROL) => {
            c.to_ascii_lowercase().to_string()
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Esc => "esc".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Tab => "tab".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Up => "up".to_owned(),
        KeyCode::Down => "down".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::PageUp => "pageup".to_owned(),
        KeyCode::PageDown => "pagedown".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        KeyCode::F(n) => format!("f{n}"),
        _ => return None,
    };

    // Shift is never spelled out: the char itself encodes the case.
    let mut prefix = String::new();
    if modifiers.contains(KeyModifiers::CONTROL) {
        prefix.push_str("ctrl+");
    }
    if modifiers.contains(KeyModifiers::ALT) {
        prefix.push_str("alt+");
    }

    Some(format!("{prefix}{base}"))
}

// ---------------------------------------------------------------------------
// Default keybindings
// ---------------------------------------------------------------------------

fn kb(key: &str, builtin: &str, name: &str) -> Keybinding {
    Keybinding {
        key: key.to_owned(),
        builtin: builtin.to_owned(),
        name: Some(name.to_owned()),
    }
}

/// Default universal keybindings.
pub fn default_universal() -> Vec<Keybinding> {
    vec![
        kb("j", "move_down", "Move cursor down"),
        kb("down", "move_down", "Move cursor down"),
        kb("k", "move_up", "Move cursor up"),
        kb("up", "move_up", "Move cursor up"),
        kb("g", "first", "Jump to first issue"),
        kb("home", "first", "Jump to first issue"),
        kb("G", "last", "Jump to last issue"),
        kb("end", "last", "Jump to last issue"),
        kb("ctrl+d", "page_down", "Page down"),
        kb("pagedown", "page_down", "Page down"),
        kb("ctrl+u", "page_up", "Page up"),
        kb("pageup", "page_up", "Page up"),
        kb("?", "toggle_help", "Toggle help"),
        kb("q", "quit", "Quit"),
        kb("ctrl+c", "quit", "Quit"),
    ]
}

/// Default table keybindings.
pub fn default_table() -> Vec<Keybinding> {
    vec![
        kb("space", "toggle_row", "Toggle issue"),
        kb("enter", "toggle_row", "Toggle issue"),
        kb("a", "toggle_all", "Select / deselect all"),
        kb("x", "clear_selection", "Clear selection"),
    ]
}

// ---------------------------------------------------------------------------
// Merged keybinding set
// ---------------------------------------------------------------------------

/// Defaults merged with user overrides.
#[derive(Debug, Clone)]
pub struct MergedBindings {
    pub universal: Vec<Keybinding>,
    pub table: Vec<Keybinding>,
}

impl Default for MergedBindings {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
    }
}

impl MergedBindings {
    /// Merge user config overrides on top of defaults.
    ///
    /// User bindings for a key replace the default binding for that key.
    /// User bindings for keys not in defaults are appended.
    pub fn from_config(config: &KeybindingsConfig) -> Self {
        Self {
            universal: merge_lists(&default_universal(), &config.universal),
            table: merge_lists(&default_table(), &config.table),
        }
    }

    /// Look up a key string: table bindings first, then universal.
    pub fn resolve(&self, key: &str) -> Option<BuiltinAction> {
        find_binding(&self.table, key).or_else(|| find_binding(&self.universal, key))
    }

    /// All bindings as `(section_label, bindings)` pairs, universal first.
    pub fn sections(&self) -> Vec<(&'static str, &[Keybinding])> {
        vec![
            ("Universal", self.universal.as_slice()),
            ("Table", self.table.as_slice()),
        ]
    }
}

fn merge_lists(defaults: &[Keybinding], overrides: &[Keybinding]) -> Vec<Keybinding> {
    let override_keys: HashSet<&str> = overrides.iter().map(|b| b.key.as_str()).collect();

    let mut result: Vec<Keybinding> = defaults
        .iter()
        .filter(|b| !override_keys.contains(b.key.as_str()))
        .cloned()
        .collect();

    for binding in overrides {
        if BuiltinAction::from_name(&binding.builtin).is_none() {
            tracing::warn!(key = %binding.key, builtin = %binding.builtin, "unknown builtin action");
        }
        result.push(binding.clone());
    }
    result
}

fn find_binding(bindings: &[Keybinding], key: &str) -> Option<BuiltinAction> {
    bindings
        .iter()
        .filter(|b| b.key == key)
        .find_map(|b| BuiltinAction::from_name(&b.builtin))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
