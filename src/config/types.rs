use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::color::Color;
use crate::config::keybindings::KeybindingsConfig;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub defaults: Defaults,
    pub layout: LayoutConfig,
    pub theme: Theme,
    pub keybindings: KeybindingsConfig,
    /// `builtin:<name>` or a path to a theme-only TOML file.
    pub theme_file: Option<String>,
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Issues JSON to load when `--issues` is not given.
    pub issues_file: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

/// Column ids that can be hidden or resized: `name`, `message`, `status`,
/// `events`, `users`, `value`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub hidden: Vec<String>,
    pub widths: HashMap<String, u16>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hidden: vec!["events".to_owned(), "users".to_owned(), "value".to_owned()],
            widths: HashMap::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub ui: UiTheme,
    pub colors: ColorsTheme,
    pub icons: IconConfig,
}

impl Theme {
    /// Layer `overlay` on top of `base`: every slot set in `overlay` wins.
    pub fn merge(base: Theme, overlay: Theme) -> Theme {
        Theme {
            ui: UiTheme {
                table: TableTheme {
                    show_separator: overlay
                        .ui
                        .table
                        .show_separator
                        .or(base.ui.table.show_separator),
                },
            },
            colors: ColorsTheme {
                text: TextColors {
                    primary: overlay.colors.text.primary.or(base.colors.text.primary),
                    secondary: overlay.colors.text.secondary.or(base.colors.text.secondary),
                    faint: overlay.colors.text.faint.or(base.colors.text.faint),
                },
                status: StatusColors {
                    open: overlay.colors.status.open.or(base.colors.status.open),
                    resolved: overlay.colors.status.resolved.or(base.colors.status.resolved),
                },
                background: BgColors {
                    cursor: overlay
                        .colors
                        .background
                        .cursor
                        .or(base.colors.background.cursor),
                    checked: overlay
                        .colors
                        .background
                        .checked
                        .or(base.colors.background.checked),
                },
                border: BorderColors {
                    primary: overlay.colors.border.primary.or(base.colors.border.primary),
                    faint: overlay.colors.border.faint.or(base.colors.border.faint),
                },
            },
            icons: IconConfig {
                preset: overlay.icons.preset.or(base.icons.preset),
                checkbox_checked: overlay.icons.checkbox_checked.or(base.icons.checkbox_checked),
                checkbox_unchecked: overlay
                    .icons
                    .checkbox_unchecked
                    .or(base.icons.checkbox_unchecked),
                checkbox_indeterminate: overlay
                    .icons
                    .checkbox_indeterminate
                    .or(base.icons.checkbox_indeterminate),
                checkbox_disabled: overlay
                    .icons
                    .checkbox_disabled
                    .or(base.icons.checkbox_disabled),
                status_dot: overlay.icons.status_dot.or(base.icons.status_dot),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UiTheme {
    pub table: TableTheme,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableTheme {
    /// Draw a rule under the column headers. Defaults to `true`.
    pub show_separator: Option<bool>,
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorsTheme {
    pub text: TextColors,
    pub status: StatusColors,
    pub background: BgColors,
    pub border: BorderColors,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TextColors {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    /// Resolved rows and other de-emphasized text.
    pub faint: Option<Color>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatusColors {
    pub open: Option<Color>,
    pub resolved: Option<Color>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BgColors {
    /// Keyboard cursor row.
    pub cursor: Option<Color>,
    /// Checked rows.
    pub checked: Option<Color>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BorderColors {
    pub primary: Option<Color>,
    pub faint: Option<Color>,
}

// ---------------------------------------------------------------------------
// Icons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// `"unicode"` (default) or `"ascii"`.
    pub preset: Option<String>,
    pub checkbox_checked: Option<String>,
    pub checkbox_unchecked: Option<String>,
    pub checkbox_indeterminate: Option<String>,
    pub checkbox_disabled: Option<String>,
    pub status_dot: Option<String>,
}
