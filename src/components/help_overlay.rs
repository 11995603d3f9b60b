use std::collections::HashMap;

use iocraft::prelude::*;

use crate::color::{Color as AppColor, ColorDepth};
use crate::config::keybindings::{BuiltinAction, Keybinding, MergedBindings};

// ---------------------------------------------------------------------------
// Help overlay
// ---------------------------------------------------------------------------

/// Pre-rendered overlay data (owned, 'static-safe).
pub struct RenderedHelpOverlay {
    pub groups: Vec<HelpGroup>,
    pub title_fg: Color,
    pub key_fg: Color,
    pub desc_fg: Color,
    pub border_fg: Color,
}

/// A titled group of keybinding rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpGroup {
    pub title: String,
    pub rows: Vec<HelpRow>,
}

/// One action with every key bound to it, e.g. `j / ↓` → "Move cursor down".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRow {
    pub keys: String,
    pub description: String,
}

pub struct HelpOverlayBuildConfig<'a> {
    pub bindings: &'a MergedBindings,
    pub depth: ColorDepth,
    pub title_color: Option<AppColor>,
    pub key_color: Option<AppColor>,
    pub desc_color: Option<AppColor>,
    pub border_color: Option<AppColor>,
}

impl RenderedHelpOverlay {
    pub fn build(cfg: &HelpOverlayBuildConfig<'_>) -> Self {
        let fg = |c: Option<AppColor>, fallback: Color| {
            c.map_or(fallback, |c| c.to_crossterm_color(cfg.depth))
        };
        Self {
            groups: build_help_groups(cfg.bindings),
            title_fg: fg(cfg.title_color, Color::White),
            key_fg: fg(cfg.key_color, Color::Cyan),
            desc_fg: fg(cfg.desc_color, Color::Grey),
            border_fg: fg(cfg.border_color, Color::DarkGrey),
        }
    }
}

/// Group bindings per section, combining keys that share a description.
pub fn build_help_groups(bindings: &MergedBindings) -> Vec<HelpGroup> {
    bindings
        .sections()
        .into_iter()
        .filter_map(|(title, keybindings)| {
            let mut rows: Vec<HelpRow> = Vec::new();
            let mut seen: HashMap<String, usize> = HashMap::new();
            for kb in keybindings {
                let desc = describe(kb);
                let key = format_key_display(&kb.key);
                if let Some(&idx) = seen.get(&desc) {
                    rows[idx].keys = format!("{} / {key}", rows[idx].keys);
                } else {
                    seen.insert(desc.clone(), rows.len());
                    rows.push(HelpRow {
                        keys: key,
                        description: desc,
                    });
                }
            }
            (!rows.is_empty()).then(|| HelpGroup {
                title: title.to_owned(),
                rows,
            })
        })
        .collect()
}

fn describe(kb: &Keybinding) -> String {
    kb.name.clone().unwrap_or_else(|| {
        BuiltinAction::from_name(&kb.builtin)
            .map_or_else(|| "(unbound)".to_owned(), |a| a.description().to_owned())
    })
}

/// Format a key string for display (capitalize special keys).
fn format_key_display(key: &str) -> String {
    match key {
        "space" => "Space".to_owned(),
        "enter" => "Enter".to_owned(),
        "esc" => "Esc".to_owned(),
        "pageup" => "PgUp".to_owned(),
        "pagedown" => "PgDn".to_owned(),
        "up" => "\u{2191}".to_owned(),
        "down" => "\u{2193}".to_owned(),
        "home" => "Home".to_owned(),
        "end" => "End".to_owned(),
        s => {
            if let Some(rest) = s.strip_prefix("ctrl+") {
                format!("Ctrl+{rest}")
            } else if let Some(rest) = s.strip_prefix("alt+") {
                format!("Alt+{rest}")
            } else {
                s.to_owned()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// HelpOverlay component
// ---------------------------------------------------------------------------

#[derive(Default, Props)]
pub struct HelpOverlayProps {
    pub overlay: Option<RenderedHelpOverlay>,
    pub width: u16,
    pub height: u16,
}

#[component]
pub fn HelpOverlay(props: &mut HelpOverlayProps) -> impl Into<AnyElement<'static>> {
    let Some(overlay) = props.overlay.take() else {
        return element! { View }.into_any();
    };

    let width = u32::from(props.width);
    let height = u32::from(props.height);

    // Centered, ~60% width, up to 80% height.
    let overlay_width = (width * 3 / 5).max(40).min(width.saturating_sub(4));
    let overlay_height = (height * 4 / 5).max(10).min(height.saturating_sub(2));
    let pad_left = width.saturating_sub(overlay_width) / 2;
    let pad_top = height.saturating_sub(overlay_height) / 2;

    let mut lines: Vec<(String, Color, Weight)> = vec![
        ("Keybindings".to_owned(), overlay.title_fg, Weight::Bold),
        (String::new(), overlay.desc_fg, Weight::Normal),
    ];
    for group in overlay.groups {
        lines.push((format!("  {}", group.title), overlay.title_fg, Weight::Bold));
        for row in group.rows {
            let line = format!("    {:>16}  {}", row.keys, row.description);
            lines.push((line, overlay.desc_fg, Weight::Normal));
        }
        lines.push((String::new(), overlay.desc_fg, Weight::Normal));
    }
    lines.push(("  Press ? or Esc to close".to_owned(), overlay.key_fg, Weight::Normal));
    lines.truncate(overlay_height.saturating_sub(2) as usize);

    element! {
        View(width, height, position: Position::Absolute) {
            View(
                margin_left: pad_left,
                margin_top: pad_top,
                width: overlay_width,
                height: overlay_height,
                flex_direction: FlexDirection::Column,
                border_style: BorderStyle::Double,
                border_color: overlay.border_fg,
                background_color: Color::Black,
                padding_left: 1,
                padding_right: 1,
                overflow: Overflow::Hidden,
            ) {
                #(lines.into_iter().map(|(text, color, weight)| {
                    element! {
                        Text(content: text, color, weight, wrap: TextWrap::NoWrap)
                    }
                }))
            }
        }
    }
    .into_any()
}
