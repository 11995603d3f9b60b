use crate::config::types::IconConfig;

/// Fully resolved glyph set: every slot has a concrete value, either from a
/// preset or from per-glyph user overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcons {
    pub checkbox_checked: String,
    pub checkbox_unchecked: String,
    pub checkbox_indeterminate: String,
    /// Checkbox of a row that cannot be selected.
    pub checkbox_disabled: String,
    pub status_dot: String,
}

impl ResolvedIcons {
    fn unicode() -> Self {
        Self {
            checkbox_checked: "\u{2611}".to_owned(),       // ☑
            checkbox_unchecked: "\u{2610}".to_owned(),     // ☐
            checkbox_indeterminate: "\u{229f}".to_owned(), // ⊟
            checkbox_disabled: "\u{2610}".to_owned(),      // ☐
            status_dot: "\u{25cf}".to_owned(),             // ●
        }
    }

    /// Plain ASCII fallback, works everywhere.
    fn ascii() -> Self {
        Self {
            checkbox_checked: "[x]".to_owned(),
            checkbox_unchecked: "[ ]".to_owned(),
            checkbox_indeterminate: "[-]".to_owned(),
            checkbox_disabled: "[.]".to_owned(),
            status_dot: "*".to_owned(),
        }
    }

    /// Pick a preset, then apply per-glyph overrides.
    pub fn resolve(config: &IconConfig) -> Self {
        let base = match config.preset.as_deref() {
            Some("ascii") => Self::ascii(),
            _ => Self::unicode(),
        };
        Self {
            checkbox_checked: config
                .checkbox_checked
                .clone()
                .unwrap_or(base.checkbox_checked),
            checkbox_unchecked: config
                .checkbox_unchecked
                .clone()
                .unwrap_or(base.checkbox_unchecked),
            checkbox_indeterminate: config
                .checkbox_indeterminate
                .clone()
                .unwrap_or(base.checkbox_indeterminate),
            checkbox_disabled: config
                .checkbox_disabled
                .clone()
                .unwrap_or(base.checkbox_disabled),
            status_dot: config.status_dot.clone().unwrap_or(base.status_dot),
        }
    }
}
