use crate::color::Color;
use crate::config::types::Theme;
use crate::icons::ResolvedIcons;

/// Detected terminal background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Dark,
    Light,
}

impl Background {
    /// Detect whether the terminal has a dark or light background.
    ///
    /// Heuristic: check `COLORFGBG` (format "fg;bg"), fall back to dark.
    pub fn detect() -> Self {
        std::env::var("COLORFGBG")
            .ok()
            .as_deref()
            .and_then(Self::from_colorfgbg)
            .unwrap_or(Background::Dark)
    }

    fn from_colorfgbg(val: &str) -> Option<Self> {
        let bg: u8 = val.rsplit(';').next()?.parse().ok()?;
        // ANSI 0-6 and 8 are the dark backgrounds.
        Some(if bg > 6 && bg != 8 {
            Background::Light
        } else {
            Background::Dark
        })
    }
}

/// A fully resolved theme: every slot has a concrete value, either from the
/// user config or from the defaults for the detected background.
#[derive(Debug, Clone)]
pub struct ResolvedTheme {
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_faint: Color,
    pub status_open: Color,
    pub status_resolved: Color,
    pub bg_cursor: Color,
    pub bg_checked: Color,
    pub border_primary: Color,
    pub border_faint: Color,
    pub show_separator: bool,
    pub icons: ResolvedIcons,
}

impl ResolvedTheme {
    pub fn resolve(theme: &Theme, bg: Background) -> Self {
        let d = Defaults::for_background(bg);
        let c = &theme.colors;
        Self {
            text_primary: c.text.primary.unwrap_or(d.text_primary),
            text_secondary: c.text.secondary.unwrap_or(d.text_secondary),
            text_faint: c.text.faint.unwrap_or(d.text_faint),
            status_open: c.status.open.unwrap_or(d.status_open),
            status_resolved: c.status.resolved.unwrap_or(d.status_resolved),
            bg_cursor: c.background.cursor.unwrap_or(d.bg_cursor),
            bg_checked: c.background.checked.unwrap_or(d.bg_checked),
            border_primary: c.border.primary.unwrap_or(d.border_primary),
            border_faint: c.border.faint.unwrap_or(d.border_faint),
            show_separator: theme.ui.table.show_separator.unwrap_or(true),
            icons: ResolvedIcons::resolve(&theme.icons),
        }
    }
}

impl Default for ResolvedTheme {
    fn default() -> Self {
        Self::resolve(&Theme::default(), Background::Dark)
    }
}

struct Defaults {
    text_primary: Color,
    text_secondary: Color,
    text_faint: Color,
    status_open: Color,
    status_resolved: Color,
    bg_cursor: Color,
    bg_checked: Color,
    border_primary: Color,
    border_faint: Color,
}

impl Defaults {
    fn for_background(bg: Background) -> Self {
        match bg {
            Background::Dark => Self {
                text_primary: Color::Ansi256(7),
                text_secondary: Color::Ansi256(245),
                text_faint: Color::Ansi256(243),
                status_open: Color::Ansi256(12),    // bright blue
                status_resolved: Color::Ansi256(8), // gray
                bg_cursor: Color::Ansi256(237),
                bg_checked: Color::Ansi256(17), // navy
                border_primary: Color::Ansi256(244),
                border_faint: Color::Ansi256(241),
            },
            Background::Light => Self {
                text_primary: Color::Ansi256(0),
                text_secondary: Color::Ansi256(240),
                text_faint: Color::Ansi256(248),
                status_open: Color::Ansi256(4),
                status_resolved: Color::Ansi256(246),
                bg_cursor: Color::Ansi256(254),
                bg_checked: Color::Ansi256(189), // pale blue
                border_primary: Color::Ansi256(240),
                border_faint: Color::Ansi256(252),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colorfgbg_parsing() {
        assert_eq!(Background::from_colorfgbg("15;0"), Some(Background::Dark));
        assert_eq!(Background::from_colorfgbg("0;15"), Some(Background::Light));
        assert_eq!(Background::from_colorfgbg("7;8"), Some(Background::Dark));
        assert_eq!(Background::from_colorfgbg("garbage"), None);
    }

    #[test]
    fn user_color_overrides_default() {
        let mut theme = Theme::default();
        theme.colors.background.checked = Some(Color::Hex { r: 1, g: 2, b: 3 });
        let resolved = ResolvedTheme::resolve(&theme, Background::Dark);
        assert_eq!(resolved.bg_checked, Color::Hex { r: 1, g: 2, b: 3 });
        assert_eq!(resolved.bg_cursor, Color::Ansi256(237));
        assert!(resolved.show_separator);
    }

    #[test]
    fn light_defaults_differ_from_dark() {
        let theme = Theme::default();
        let dark = ResolvedTheme::resolve(&theme, Background::Dark);
        let light = ResolvedTheme::resolve(&theme, Background::Light);
        assert_ne!(dark.text_primary, light.text_primary);
    }
}
