use iocraft::prelude::*;

use crate::color::{Color as AppColor, ColorDepth};

// ---------------------------------------------------------------------------
// Footer component: structured status bar
// ---------------------------------------------------------------------------

pub struct RenderedFooter {
    pub context_text: String,
    pub counts_text: String,
    pub help_hint: String,
    pub text_fg: Color,
    pub border_fg: Color,
    pub separator_fg: Color,
}

impl RenderedFooter {
    pub fn build(
        context_text: String,
        counts_text: String,
        depth: ColorDepth,
        text_color: Option<AppColor>,
        border_color: Option<AppColor>,
    ) -> Self {
        let text_fg = text_color.map_or(Color::DarkGrey, |c| c.to_crossterm_color(depth));
        let border_fg = border_color.map_or(Color::DarkGrey, |c| c.to_crossterm_color(depth));
        Self {
            context_text,
            counts_text,
            help_hint: "? help".to_owned(),
            text_fg,
            border_fg,
            separator_fg: text_fg,
        }
    }
}

/// Format the cursor position as "Issue n/N" (1-based).
pub fn format_position(cursor: usize, total: usize) -> String {
    let pos = if total > 0 { cursor + 1 } else { 0 };
    format!("Issue {pos}/{total}")
}

/// Format open/resolved counts, e.g. "5 open, 3 resolved".
pub fn format_counts(open: usize, total: usize) -> String {
    format!("{open} open, {} resolved", total.saturating_sub(open))
}

#[derive(Default, Props)]
pub struct FooterProps {
    pub footer: Option<RenderedFooter>,
}

#[component]
pub fn Footer(props: &mut FooterProps) -> impl Into<AnyElement<'static>> {
    let Some(f) = props.footer.take() else {
        return element! { View }.into_any();
    };

    let mut contents = Vec::new();
    if !f.context_text.is_empty() {
        contents.push(MixedTextContent::new(&f.context_text).color(f.text_fg));
    }
    if !f.context_text.is_empty() && !f.counts_text.is_empty() {
        contents.push(MixedTextContent::new("  \u{2022}  ").color(f.separator_fg));
    }
    if !f.counts_text.is_empty() {
        contents.push(MixedTextContent::new(&f.counts_text).color(f.text_fg));
    }

    element! {
        View(
            border_style: BorderStyle::Single,
            border_edges: Edges::Top,
            border_color: f.border_fg,
            padding_left: 1,
            padding_right: 1,
        ) {
            View(flex_grow: 1.0) {
                MixedText(contents, wrap: TextWrap::NoWrap)
            }
            Text(content: " \u{2502} ", color: f.separator_fg, wrap: TextWrap::NoWrap)
            Text(content: f.help_hint.clone(), color: f.text_fg, wrap: TextWrap::NoWrap)
        }
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_is_one_based() {
        assert_eq!(format_position(0, 8), "Issue 1/8");
        assert_eq!(format_position(7, 8), "Issue 8/8");
    }

    #[test]
    fn empty_list_shows_zero() {
        assert_eq!(format_position(0, 0), "Issue 0/0");
    }

    #[test]
    fn counts() {
        assert_eq!(format_counts(5, 8), "5 open, 3 resolved");
    }
}
