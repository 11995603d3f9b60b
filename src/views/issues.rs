use std::collections::{HashMap, HashSet};

use crossterm::event::{MouseButton, MouseEventKind};
use iocraft::prelude::*;

use crate::color::ColorDepth;
use crate::components::footer::{self, Footer, RenderedFooter};
use crate::components::help_overlay::{HelpOverlay, HelpOverlayBuildConfig, RenderedHelpOverlay};
use crate::components::table::{
    Cell, ClickTarget, Column, RenderedTable, Row, ScrollableTable, TableBuildConfig,
};
use crate::config::keybindings::{BuiltinAction, MergedBindings, key_event_to_string};
use crate::config::types::LayoutConfig;
use crate::selection::SelectionState;
use crate::theme::ResolvedTheme;
use crate::types::{Issue, IssueStatus};
use crate::util::expand_emoji;

/// Lines taken by the footer (top border + text).
const FOOTER_LINES: u16 = 2;

// ---------------------------------------------------------------------------
// Issue column definitions
// ---------------------------------------------------------------------------

pub fn issue_columns() -> Vec<Column> {
    let col = |id: &str, header: &str, pct: f32, align: TextAlign| Column {
        id: id.to_owned(),
        header: header.to_owned(),
        default_width_pct: pct,
        align,
    };
    vec![
        col("name", "Name", 0.25, TextAlign::Left),
        col("message", "Message", 0.45, TextAlign::Left),
        col("status", "Status", 0.15, TextAlign::Left),
        col("events", "Events", 0.05, TextAlign::Right),
        col("users", "Users", 0.05, TextAlign::Right),
        col("value", "Value", 0.05, TextAlign::Right),
    ]
}

/// Convert an `Issue` into a table `Row`. Resolved issues are muted.
pub fn issue_to_row(issue: &Issue, theme: &ResolvedTheme) -> Row {
    let text = if issue.is_open() {
        theme.text_primary
    } else {
        theme.text_faint
    };
    let numbers = if issue.is_open() {
        theme.text_secondary
    } else {
        theme.text_faint
    };
    let status_color = match issue.status {
        IssueStatus::Open => theme.status_open,
        IssueStatus::Resolved => theme.status_resolved,
    };

    let mut row = HashMap::new();
    row.insert(
        "name".to_owned(),
        Cell::colored(expand_emoji(&issue.name), text),
    );
    row.insert(
        "message".to_owned(),
        Cell::colored(expand_emoji(&issue.message), text),
    );
    row.insert(
        "status".to_owned(),
        Cell::colored(
            format!("{} {}", theme.icons.status_dot, issue.status.label()),
            status_color,
        )
        .bold(),
    );
    row.insert(
        "events".to_owned(),
        Cell::colored(issue.num_events.to_string(), numbers),
    );
    row.insert(
        "users".to_owned(),
        Cell::colored(issue.num_users.to_string(), numbers),
    );
    row.insert(
        "value".to_owned(),
        Cell::colored(issue.value.to_string(), numbers),
    );
    row
}

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// What the surrounding UI should do after an input was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    None,
    ToggleHelp,
    Quit,
}

/// Everything the table view mutates in response to input: the selection
/// plus the keyboard cursor and scroll position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewState {
    pub selection: SelectionState,
    pub cursor: usize,
    pub scroll_offset: usize,
}

impl TableViewState {
    pub fn new(issues: &[Issue]) -> Self {
        Self {
            selection: SelectionState::new(issues),
            cursor: 0,
            scroll_offset: 0,
        }
    }

    /// Apply a keyboard action. `visible_rows` is the body height in rows.
    pub fn apply(&mut self, action: BuiltinAction, visible_rows: usize) -> ViewCommand {
        let len = self.selection.len();
        let last = len.saturating_sub(1);
        let page = visible_rows.max(1);

        match action {
            BuiltinAction::MoveDown => self.cursor = (self.cursor + 1).min(last),
            BuiltinAction::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            BuiltinAction::First => self.cursor = 0,
            BuiltinAction::Last => self.cursor = last,
            BuiltinAction::PageDown => self.cursor = (self.cursor + page).min(last),
            BuiltinAction::PageUp => self.cursor = self.cursor.saturating_sub(page),
            BuiltinAction::ToggleRow => {
                if self.cursor < len {
                    self.selection.toggle_row(self.cursor);
                }
            }
            BuiltinAction::ToggleAll => self.selection.toggle_master(),
            BuiltinAction::ClearSelection => self.selection.set_all(false),
            BuiltinAction::ToggleHelp => return ViewCommand::ToggleHelp,
            BuiltinAction::Quit => return ViewCommand::Quit,
        }
        self.scroll_to_cursor(visible_rows);
        ViewCommand::None
    }

    /// Apply a mouse click that was already resolved to a target.
    pub fn click(&mut self, target: ClickTarget, visible_rows: usize) {
        match target {
            ClickTarget::Master => self.selection.toggle_master(),
            ClickTarget::Row(index) => {
                self.cursor = index;
                self.selection.toggle_row(index);
                self.scroll_to_cursor(visible_rows);
            }
        }
    }

    fn scroll_to_cursor(&mut self, visible_rows: usize) {
        let visible = visible_rows.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + visible {
            self.scroll_offset = self.cursor + 1 - visible;
        }
    }
}

/// Whether a key press dismisses the help overlay: `Esc`, or whatever key is
/// bound to `toggle_help`.
pub fn closes_help(
    code: KeyCode,
    modifiers: KeyModifiers,
    kind: KeyEventKind,
    bindings: &MergedBindings,
) -> bool {
    code == KeyCode::Esc
        || key_event_to_string(code, modifiers, kind)
            .and_then(|key| bindings.resolve(&key))
            == Some(BuiltinAction::ToggleHelp)
}

// ---------------------------------------------------------------------------
// IssueTableView component
// ---------------------------------------------------------------------------

#[derive(Default, Props)]
pub struct IssueTableViewProps<'a> {
    /// The immutable issue list the view is mounted with.
    pub issues: Option<&'a [Issue]>,
    pub theme: Option<&'a ResolvedTheme>,
    pub keybindings: Option<&'a MergedBindings>,
    pub layout: Option<&'a LayoutConfig>,
    pub color_depth: ColorDepth,
    pub width: u16,
    pub height: u16,
    pub should_exit: Option<State<bool>>,
}

#[component]
pub fn IssueTableView<'a>(
    props: &IssueTableViewProps<'a>,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let issues = props.issues.unwrap_or(&[]);
    let theme = props.theme.cloned().unwrap_or_default();
    let depth = props.color_depth;
    let should_exit = props.should_exit;

    let mut view_state = hooks.use_state(|| TableViewState::new(issues));
    let mut help_visible = hooks.use_state(|| false);

    let table_chrome: u16 = if theme.show_separator { 3 } else { 2 };
    let visible_rows = usize::from(
        props
            .height
            .saturating_sub(table_chrome + FOOTER_LINES)
            .max(1),
    );

    // Build the table for this frame.
    let columns = issue_columns();
    let rows: Vec<Row> = issues.iter().map(|i| issue_to_row(i, &theme)).collect();
    let layout_cfg = props.layout.cloned().unwrap_or_default();
    let hidden: HashSet<String> = layout_cfg.hidden.iter().cloned().collect();

    let state = view_state.read().clone();
    let rendered_table = RenderedTable::build(&TableBuildConfig {
        columns: &columns,
        rows: &rows,
        selection: &state.selection,
        cursor: state.cursor,
        scroll_offset: state.scroll_offset,
        visible_rows,
        hidden_columns: Some(&hidden),
        width_overrides: Some(&layout_cfg.widths),
        total_width: props.width,
        depth,
        theme: &theme,
        empty_message: Some("No issues"),
    });
    let table_layout = rendered_table.layout;

    // Input handling.
    let keybindings = props.keybindings.cloned().unwrap_or_default();
    hooks.use_terminal_events({
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                // Help overlay: intercept all keys when visible.
                if help_visible.get() {
                    if closes_help(code, modifiers, kind, &keybindings) {
                        help_visible.set(false);
                    }
                    return;
                }
                let Some(action) = key_event_to_string(code, modifiers, kind)
                    .and_then(|key| keybindings.resolve(&key))
                else {
                    return;
                };
                let mut next = view_state.read().clone();
                match next.apply(action, visible_rows) {
                    ViewCommand::Quit => {
                        if let Some(mut exit) = should_exit {
                            exit.set(true);
                        }
                    }
                    ViewCommand::ToggleHelp => help_visible.set(true),
                    ViewCommand::None => view_state.set(next),
                }
            }
            TerminalEvent::FullscreenMouse(FullscreenMouseEvent {
                kind, column, row, ..
            }) => {
                if help_visible.get() {
                    return;
                }
                let mut next = view_state.read().clone();
                match kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        let Some(target) = table_layout.hit_test(column, row, &next.selection)
                        else {
                            return;
                        };
                        tracing::debug!(?target, column, row, "click");
                        next.click(target, visible_rows);
                    }
                    MouseEventKind::ScrollDown => {
                        next.apply(BuiltinAction::MoveDown, visible_rows);
                    }
                    MouseEventKind::ScrollUp => {
                        next.apply(BuiltinAction::MoveUp, visible_rows);
                    }
                    _ => return,
                }
                view_state.set(next);
            }
            _ => {}
        }
    });

    let rendered_footer = RenderedFooter::build(
        footer::format_position(state.cursor, issues.len()),
        footer::format_counts(state.selection.open_count(), issues.len()),
        depth,
        Some(theme.text_faint),
        Some(theme.border_faint),
    );

    let rendered_help = if help_visible.get() {
        let bindings = props.keybindings.cloned().unwrap_or_default();
        Some(RenderedHelpOverlay::build(&HelpOverlayBuildConfig {
            bindings: &bindings,
            depth,
            title_color: Some(theme.text_primary),
            key_color: Some(theme.status_open),
            desc_color: Some(theme.text_secondary),
            border_color: Some(theme.border_primary),
        }))
    } else {
        None
    };

    let width = u32::from(props.width);
    let height = u32::from(props.height);

    element! {
        View(flex_direction: FlexDirection::Column, width, height) {
            View(flex_grow: 1.0, flex_direction: FlexDirection::Column, overflow: Overflow::Hidden) {
                ScrollableTable(table: rendered_table)
            }
            Footer(footer: rendered_footer)
            HelpOverlay(overlay: rendered_help, width: props.width, height: props.height)
        }
    }
    .into_any()
}
