use issue_table::components::help_overlay::build_help_groups;
use issue_table::config::keybindings::{
    BuiltinAction, Keybinding, KeybindingsConfig, MergedBindings, default_table,
    default_universal, key_event_to_string,
};

use iocraft::prelude::{KeyCode, KeyEventKind, KeyModifiers};

fn binding(key: &str, builtin: &str) -> Keybinding {
    Keybinding {
        key: key.to_owned(),
        builtin: builtin.to_owned(),
        name: None,
    }
}

fn press(code: KeyCode, modifiers: KeyModifiers) -> String {
    key_event_to_string(code, modifiers, KeyEventKind::Press).unwrap()
}

// ---------------------------------------------------------------------------
// Rebinding
// ---------------------------------------------------------------------------

#[test]
fn defaults_resolve() {
    let merged = MergedBindings::default();
    assert_eq!(merged.resolve("j"), Some(BuiltinAction::MoveDown));
    assert_eq!(merged.resolve("space"), Some(BuiltinAction::ToggleRow));
    assert_eq!(merged.resolve("enter"), Some(BuiltinAction::ToggleRow));
    assert_eq!(merged.resolve("a"), Some(BuiltinAction::ToggleAll));
    assert_eq!(merged.resolve("x"), Some(BuiltinAction::ClearSelection));
    assert_eq!(merged.resolve("ctrl+c"), Some(BuiltinAction::Quit));
    assert_eq!(merged.resolve("?"), Some(BuiltinAction::ToggleHelp));
    assert_eq!(merged.resolve("z"), None);
}

#[test]
fn override_replaces_default() {
    let config = KeybindingsConfig {
        table: vec![binding("a", "clear_selection")],
        ..Default::default()
    };
    let merged = MergedBindings::from_config(&config);
    assert_eq!(merged.resolve("a"), Some(BuiltinAction::ClearSelection));
    assert_eq!(merged.table.len(), default_table().len());
}

#[test]
fn new_key_is_appended() {
    let config = KeybindingsConfig {
        universal: vec![binding("ctrl+q", "quit")],
        ..Default::default()
    };
    let merged = MergedBindings::from_config(&config);
    assert_eq!(merged.resolve("ctrl+q"), Some(BuiltinAction::Quit));
    assert_eq!(merged.universal.len(), default_universal().len() + 1);
    // Defaults survive.
    assert_eq!(merged.resolve("q"), Some(BuiltinAction::Quit));
}

#[test]
fn table_section_shadows_universal() {
    let config = KeybindingsConfig {
        table: vec![binding("j", "toggle_row")],
        ..Default::default()
    };
    let merged = MergedBindings::from_config(&config);
    assert_eq!(merged.resolve("j"), Some(BuiltinAction::ToggleRow));
    assert_eq!(merged.resolve("k"), Some(BuiltinAction::MoveUp));
}

#[test]
fn unknown_builtin_is_ignored() {
    let config = KeybindingsConfig {
        table: vec![binding("space", "launch_rockets")],
        ..Default::default()
    };
    let merged = MergedBindings::from_config(&config);
    // The override removed the default for "space" and resolves to nothing.
    assert_eq!(merged.resolve("space"), None);
}

#[test]
fn every_builtin_name_round_trips() {
    let names = [
        ("move_down", BuiltinAction::MoveDown),
        ("move_up", BuiltinAction::MoveUp),
        ("first", BuiltinAction::First),
        ("last", BuiltinAction::Last),
        ("page_down", BuiltinAction::PageDown),
        ("page_up", BuiltinAction::PageUp),
        ("toggle_help", BuiltinAction::ToggleHelp),
        ("quit", BuiltinAction::Quit),
        ("toggle_row", BuiltinAction::ToggleRow),
        ("toggle_all", BuiltinAction::ToggleAll),
        ("clear_selection", BuiltinAction::ClearSelection),
    ];
    for (name, action) in names {
        assert_eq!(BuiltinAction::from_name(name), Some(action), "{name}");
        assert!(!action.description().is_empty());
    }
}

// ---------------------------------------------------------------------------
// Key event normalization
// ---------------------------------------------------------------------------

#[test]
fn plain_chars_keep_case() {
    assert_eq!(press(KeyCode::Char('j'), KeyModifiers::empty()), "j");
    assert_eq!(press(KeyCode::Char('G'), KeyModifiers::SHIFT), "G");
}

#[test]
fn named_keys() {
    assert_eq!(press(KeyCode::Char(' '), KeyModifiers::empty()), "space");
    assert_eq!(press(KeyCode::Enter, KeyModifiers::empty()), "enter");
    assert_eq!(press(KeyCode::Esc, KeyModifiers::empty()), "esc");
    assert_eq!(press(KeyCode::PageDown, KeyModifiers::empty()), "pagedown");
    assert_eq!(press(KeyCode::Home, KeyModifiers::empty()), "home");
    assert_eq!(press(KeyCode::F(5), KeyModifiers::empty()), "f5");
}

#[test]
fn modifier_prefixes() {
    assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), "ctrl+c");
    assert_eq!(press(KeyCode::Char('d'), KeyModifiers::ALT), "alt+d");
    assert_eq!(
        press(KeyCode::Char('x'), KeyModifiers::CONTROL | KeyModifiers::ALT),
        "ctrl+alt+x"
    );
}

#[test]
fn repeat_events_are_reported() {
    let s = key_event_to_string(KeyCode::Char('j'), KeyModifiers::empty(), KeyEventKind::Repeat);
    assert_eq!(s.as_deref(), Some("j"));
}

#[test]
fn release_events_are_dropped() {
    let s = key_event_to_string(KeyCode::Char('j'), KeyModifiers::empty(), KeyEventKind::Release);
    assert_eq!(s, None);
}

// ---------------------------------------------------------------------------
// Help overlay grouping
// ---------------------------------------------------------------------------

#[test]
fn help_groups_follow_sections() {
    let groups = build_help_groups(&MergedBindings::default());
    let titles: Vec<&str> = groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["Universal", "Table"]);
}

#[test]
fn help_lists_user_bindings() {
    let config = KeybindingsConfig {
        table: vec![binding("t", "toggle_all")],
        ..Default::default()
    };
    let groups = build_help_groups(&MergedBindings::from_config(&config));
    let table = groups.iter().find(|g| g.title == "Table").unwrap();
    assert!(
        table.rows.iter().any(|r| r.keys.split(" / ").any(|k| k == "t")),
        "user binding should appear: {:?}",
        table.rows.iter().map(|r| &r.keys).collect::<Vec<_>>()
    );
}
