use std::collections::{HashMap, HashSet};

use iocraft::prelude::*;
use unicode_width::UnicodeWidthStr;

use crate::color::{Color as AppColor, ColorDepth};
use crate::selection::{MasterState, SelectionState};
use crate::theme::ResolvedTheme;
use crate::util::truncate_to_width;

// ---------------------------------------------------------------------------
// Column definition
// ---------------------------------------------------------------------------

/// Defines a column in the table.
#[derive(Debug, Clone)]
pub struct Column {
    /// Unique identifier (e.g., "name", "message", "status").
    pub id: String,
    /// Display header text.
    pub header: String,
    /// Default width as a fraction of total width (0.0..1.0).
    pub default_width_pct: f32,
    pub align: TextAlign,
}

/// A single cell value to display.
#[derive(Debug, Clone)]
pub struct Cell {
    pub text: String,
    pub color: Option<AppColor>,
    pub bold: bool,
}

impl Cell {
    pub fn colored(text: impl Into<String>, color: AppColor) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }
}

/// A complete row of cells indexed by column id.
pub type Row = HashMap<String, Cell>;

// ---------------------------------------------------------------------------
// Screen geometry and hit testing
// ---------------------------------------------------------------------------

/// What a mouse click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The header "select all" checkbox.
    Master,
    /// An open row, by absolute index. The row's own checkbox and the rest of
    /// the row resolve to the same target, so one click is one toggle.
    Row(usize),
}

/// Where the table's pieces sit on screen, relative to the table's top-left
/// corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TableLayout {
    /// Screen row of the master checkbox line.
    pub master_row: u16,
    /// Screen row of the first rendered body row.
    pub body_top: u16,
    /// Absolute index of the first rendered body row.
    pub first_row: usize,
    /// Number of body rows rendered.
    pub row_count: usize,
    /// Width of the leading checkbox column.
    pub checkbox_width: u16,
}

impl TableLayout {
    /// Map a click at (`column`, `row`) to a target, or `None` for clicks on
    /// headers, empty space, or resolved rows.
    pub fn hit_test(
        &self,
        column: u16,
        row: u16,
        selection: &SelectionState,
    ) -> Option<ClickTarget> {
        if row == self.master_row {
            return (column < self.checkbox_width).then_some(ClickTarget::Master);
        }
        let offset = usize::from(row.checked_sub(self.body_top)?);
        if offset >= self.row_count {
            return None;
        }
        let index = self.first_row + offset;
        selection
            .is_selectable(index)
            .then_some(ClickTarget::Row(index))
    }
}

// ---------------------------------------------------------------------------
// Pre-rendered table data (all owned)
// ---------------------------------------------------------------------------

/// Pre-render table data into fully owned structures that can be passed
/// into the `element!` macro without lifetime issues.
pub struct RenderedTable {
    pub master_glyph: String,
    pub master_fg: Color,
    pub caption: String,
    pub caption_fg: Color,
    pub header_cells: Vec<HeaderCell>,
    pub body_rows: Vec<RenderedRow>,
    pub total_width: u32,
    pub checkbox_width: u32,
    pub show_separator: bool,
    pub header_fg: Color,
    pub border_fg: Color,
    /// Message to display when there are no rows.
    pub empty_message: Option<String>,
    pub layout: TableLayout,
}

pub struct HeaderCell {
    pub text: String,
    pub width: u32,
    pub align: TextAlign,
}

pub struct RenderedRow {
    pub key: usize,
    pub bg: Option<Color>,
    pub checkbox: String,
    pub checkbox_fg: Color,
    pub cells: Vec<RenderedCell>,
}

pub struct RenderedCell {
    pub text: String,
    pub fg: Color,
    pub weight: Weight,
    pub width: u32,
    pub align: TextAlign,
}

/// Configuration for building a `RenderedTable`.
pub struct TableBuildConfig<'a> {
    pub columns: &'a [Column],
    pub rows: &'a [Row],
    pub selection: &'a SelectionState,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub visible_rows: usize,
    pub hidden_columns: Option<&'a HashSet<String>>,
    pub width_overrides: Option<&'a HashMap<String, u16>>,
    pub total_width: u16,
    pub depth: ColorDepth,
    pub theme: &'a ResolvedTheme,
    /// Message to show when rows are empty.
    pub empty_message: Option<&'a str>,
}

impl RenderedTable {
    pub fn build(cfg: &TableBuildConfig<'_>) -> Self {
        let theme = cfg.theme;
        let icons = &theme.icons;
        let depth = cfg.depth;
        let selection = cfg.selection;

        let visible_columns: Vec<&Column> = cfg
            .columns
            .iter()
            .filter(|c| cfg.hidden_columns.is_none_or(|h| !h.contains(&c.id)))
            .collect();

        let checkbox_width = checkbox_column_width(theme);
        let col_widths = compute_column_widths(
            &visible_columns,
            cfg.width_overrides,
            cfg.total_width.saturating_sub(checkbox_width),
        );

        let master_glyph = match selection.master() {
            MasterState::Checked => &icons.checkbox_checked,
            MasterState::Unchecked => &icons.checkbox_unchecked,
            MasterState::Indeterminate => &icons.checkbox_indeterminate,
        };
        let master_fg = if selection.master() == MasterState::Unchecked {
            theme.text_secondary
        } else {
            theme.status_open
        };

        let header_cells: Vec<HeaderCell> = visible_columns
            .iter()
            .zip(col_widths.iter())
            .map(|(col, &w)| HeaderCell {
                text: col.header.clone(),
                width: u32::from(w),
                align: col.align,
            })
            .collect();

        let rows = cfg.rows;
        let end = (cfg.scroll_offset + cfg.visible_rows).min(rows.len());
        let visible_slice = if cfg.scroll_offset < rows.len() {
            &rows[cfg.scroll_offset..end]
        } else {
            &[]
        };

        let body_rows: Vec<RenderedRow> = visible_slice
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let index = cfg.scroll_offset + i;
                let selectable = selection.is_selectable(index);
                let checked = selection.is_checked(index);

                let bg = if index == cfg.cursor {
                    Some(theme.bg_cursor.to_crossterm_color(depth))
                } else if checked {
                    Some(theme.bg_checked.to_crossterm_color(depth))
                } else {
                    None
                };
                let (checkbox, checkbox_fg) = match (selectable, checked) {
                    (false, _) => (&icons.checkbox_disabled, theme.text_faint),
                    (true, true) => (&icons.checkbox_checked, theme.status_open),
                    (true, false) => (&icons.checkbox_unchecked, theme.text_primary),
                };

                let cells = visible_columns
                    .iter()
                    .zip(col_widths.iter())
                    .map(|(col, &w)| render_cell(row.get(&col.id), col, w, depth))
                    .collect();

                RenderedRow {
                    key: index,
                    bg,
                    checkbox: checkbox.clone(),
                    checkbox_fg: checkbox_fg.to_crossterm_color(depth),
                    cells,
                }
            })
            .collect();

        let show_separator = theme.show_separator;
        let layout = TableLayout {
            master_row: 0,
            body_top: if show_separator { 3 } else { 2 },
            first_row: cfg.scroll_offset,
            row_count: body_rows.len(),
            checkbox_width,
        };

        let empty_message = if rows.is_empty() {
            cfg.empty_message.map(String::from)
        } else {
            None
        };

        Self {
            master_glyph: master_glyph.clone(),
            master_fg: master_fg.to_crossterm_color(depth),
            caption: selection.summary_caption(),
            caption_fg: theme.text_primary.to_crossterm_color(depth),
            header_cells,
            body_rows,
            total_width: u32::from(cfg.total_width),
            checkbox_width: u32::from(checkbox_width),
            show_separator,
            header_fg: theme.text_primary.to_crossterm_color(depth),
            border_fg: theme.border_faint.to_crossterm_color(depth),
            empty_message,
            layout,
        }
    }
}

fn render_cell(cell: Option<&Cell>, col: &Column, width: u16, depth: ColorDepth) -> RenderedCell {
    // One column of breathing room between cells.
    let room = usize::from(width.saturating_sub(1));
    let text = cell.map_or_else(String::new, |c| {
        truncate_to_width(&c.text, room).into_owned()
    });
    RenderedCell {
        text,
        fg: cell
            .and_then(|c| c.color)
            .map_or(Color::Reset, |c| c.to_crossterm_color(depth)),
        weight: if cell.is_some_and(|c| c.bold) {
            Weight::Bold
        } else {
            Weight::Normal
        },
        width: u32::from(width),
        align: col.align,
    }
}

/// Leading pad, the widest checkbox glyph, then two columns of gap.
fn checkbox_column_width(theme: &ResolvedTheme) -> u16 {
    let icons = &theme.icons;
    let glyph = [
        &icons.checkbox_checked,
        &icons.checkbox_unchecked,
        &icons.checkbox_indeterminate,
        &icons.checkbox_disabled,
    ]
    .iter()
    .map(|g| g.width())
    .max()
    .unwrap_or(1);
    u16::try_from(glyph + 3).unwrap_or(u16::MAX)
}

// ---------------------------------------------------------------------------
// ScrollableTable component
// ---------------------------------------------------------------------------

#[derive(Default, Props)]
pub struct ScrollableTableProps {
    /// Pre-rendered table data.
    pub table: Option<RenderedTable>,
}

#[component]
pub fn ScrollableTable(props: &mut ScrollableTableProps) -> impl Into<AnyElement<'static>> {
    let Some(table) = props.table.take() else {
        return element! { View }.into_any();
    };

    element! {
        View(flex_direction: FlexDirection::Column, width: table.total_width) {
            // Master checkbox and selection total
            View(height: 1u32) {
                View(width: table.checkbox_width, padding_left: 1) {
                    Text(content: table.master_glyph, color: table.master_fg, wrap: TextWrap::NoWrap)
                }
                Text(
                    content: table.caption,
                    color: table.caption_fg,
                    weight: Weight::Bold,
                    wrap: TextWrap::NoWrap,
                )
            }

            // Column headers
            View(
                border_style: if table.show_separator { BorderStyle::Single } else { BorderStyle::None },
                border_edges: Edges::Bottom,
                border_color: table.border_fg,
            ) {
                View(width: table.checkbox_width)
                #(table.header_cells.into_iter().enumerate().map(|(i, hc)| {
                    element! {
                        View(key: i, width: hc.width) {
                            Text(
                                content: hc.text,
                                weight: Weight::Bold,
                                color: table.header_fg,
                                wrap: TextWrap::NoWrap,
                                align: hc.align,
                            )
                        }
                    }
                }))
            }

            // Empty-state message or body rows
            #(table.empty_message.into_iter().map(|msg| {
                element! {
                    View(padding_top: 1, padding_left: 2) {
                        Text(content: msg, color: Color::DarkGrey)
                    }
                }
            }))
            #(table.body_rows.into_iter().map(|row| {
                element! {
                    View(key: row.key, height: 1u32, background_color: row.bg) {
                        View(width: table.checkbox_width, padding_left: 1) {
                            Text(content: row.checkbox, color: row.checkbox_fg, wrap: TextWrap::NoWrap)
                        }
                        #(row.cells.into_iter().enumerate().map(|(ci, cell)| {
                            element! {
                                View(key: ci, width: cell.width) {
                                    Text(
                                        content: cell.text,
                                        color: cell.fg,
                                        weight: cell.weight,
                                        wrap: TextWrap::NoWrap,
                                        align: cell.align,
                                    )
                                }
                            }
                        }))
                    }
                }
            }))
        }
    }
    .into_any()
}

// ---------------------------------------------------------------------------
// Column width computation
// ---------------------------------------------------------------------------

fn compute_column_widths(
    columns: &[&Column],
    overrides: Option<&HashMap<String, u16>>,
    total: u16,
) -> Vec<u16> {
    let fixed: Vec<Option<u16>> = columns
        .iter()
        .map(|c| overrides.and_then(|o| o.get(&c.id)).copied())
        .collect();

    let fixed_total = fixed.iter().flatten().fold(0u16, |acc, &w| acc.saturating_add(w));
    let remaining = total.saturating_sub(fixed_total);

    let flexible_pct: f32 = columns
        .iter()
        .zip(&fixed)
        .filter(|(_, w)| w.is_none())
        .map(|(c, _)| c.default_width_pct)
        .sum();

    columns
        .iter()
        .zip(&fixed)
        .map(|(col, w)| {
            w.unwrap_or_else(|| {
                let ratio = if flexible_pct > 0.0 {
                    col.default_width_pct / flexible_pct
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    {
                        1.0 / columns.len() as f32
                    }
                };
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let width = (f32::from(remaining) * ratio).round() as u16;
                width
            })
        })
        .collect()
}
