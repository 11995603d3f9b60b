//! Selection behavior over open and resolved issues: the concrete
//! three-issue walkthrough plus properties that must hold after any
//! sequence of operations.

use issue_table::selection::{MasterState, SelectionState};
use issue_table::types::{Issue, IssueStatus};
use proptest::prelude::*;

fn issue(index: usize, open: bool, value: i64) -> Issue {
    Issue {
        id: format!("issue-{index}"),
        name: format!("Issue {index}"),
        message: String::new(),
        status: if open {
            IssueStatus::Open
        } else {
            IssueStatus::Resolved
        },
        num_events: 0,
        num_users: 0,
        value,
    }
}

fn issues_from(rows: &[(bool, i64)]) -> Vec<Issue> {
    rows.iter()
        .enumerate()
        .map(|(i, &(open, value))| issue(i, open, value))
        .collect()
}

/// `[open 10, open 5, resolved 99]`
fn scenario() -> Vec<Issue> {
    issues_from(&[(true, 10), (true, 5), (false, 99)])
}

fn expected_total(issues: &[Issue], state: &SelectionState) -> i128 {
    issues
        .iter()
        .enumerate()
        .filter(|(i, issue)| issue.is_open() && state.is_checked(*i))
        .map(|(_, issue)| i128::from(issue.value))
        .sum()
}

fn expected_master(issues: &[Issue], state: &SelectionState) -> MasterState {
    let open = issues.iter().filter(|i| i.is_open()).count();
    let selected = issues
        .iter()
        .enumerate()
        .filter(|(i, issue)| issue.is_open() && state.is_checked(*i))
        .count();
    if selected == 0 {
        MasterState::Unchecked
    } else if selected == open {
        MasterState::Checked
    } else {
        MasterState::Indeterminate
    }
}

// ===========================================================================
// Concrete walkthrough
// ===========================================================================

#[test]
fn three_issue_walkthrough() {
    let issues = scenario();
    let mut state = SelectionState::new(&issues);
    assert_eq!(state.selected_total(), 0);
    assert_eq!(state.master(), MasterState::Unchecked);

    state.toggle_row(0);
    assert_eq!(state.selected_total(), 10);
    assert_eq!(state.master(), MasterState::Indeterminate);

    state.toggle_row(1);
    assert_eq!(state.selected_total(), 15);
    assert_eq!(state.master(), MasterState::Checked);

    let before = state.clone();
    state.toggle_row(2);
    assert_eq!(state, before, "resolved row must not change anything");

    state.set_all(false);
    assert_eq!(state.selected_total(), 0);
    assert_eq!(state.master(), MasterState::Unchecked);
}

#[test]
fn resolved_toggle_is_a_no_op_at_every_stage() {
    let issues = scenario();
    let mut state = SelectionState::new(&issues);
    for step in [Some(0), Some(1), None] {
        if let Some(i) = step {
            state.toggle_row(i);
        }
        let before = state.clone();
        state.toggle_row(2);
        assert_eq!(state, before);
    }
}

#[test]
fn caption_follows_total() {
    let issues = scenario();
    let mut state = SelectionState::new(&issues);
    assert_eq!(state.summary_caption(), "None selected");
    state.toggle_row(0);
    assert_eq!(state.summary_caption(), "Selected 10");
    state.toggle_master();
    assert_eq!(state.summary_caption(), "Selected 15");
}

#[test]
fn zero_value_selection_reads_none_selected() {
    let issues = issues_from(&[(true, 0), (true, 3)]);
    let mut state = SelectionState::new(&issues);
    state.toggle_row(0);
    assert_eq!(state.master(), MasterState::Indeterminate);
    assert_eq!(state.summary_caption(), "None selected");
}

#[test]
fn extreme_values_sum_exactly() {
    let issues = issues_from(&[(true, i64::MAX), (true, 1), (true, i64::MAX)]);
    let mut state = SelectionState::new(&issues);
    state.toggle_row(0);
    state.toggle_row(1);
    assert_eq!(state.selected_total(), i128::from(i64::MAX) + 1);
    state.toggle_row(2);
    assert_eq!(state.selected_total(), 2 * i128::from(i64::MAX) + 1);
    assert_eq!(
        state.summary_caption(),
        format!("Selected {}", 2 * i128::from(i64::MAX) + 1)
    );
}

#[test]
fn extreme_negative_values_sum_exactly() {
    let issues = issues_from(&[(true, i64::MIN), (true, -1)]);
    let mut state = SelectionState::new(&issues);
    state.set_all(true);
    assert_eq!(state.selected_total(), i128::from(i64::MIN) - 1);
}

// ===========================================================================
// Master control
// ===========================================================================

#[test]
fn master_click_from_unchecked_selects_all_open() {
    let issues = scenario();
    let mut state = SelectionState::new(&issues);
    state.toggle_master();
    assert_eq!(state.checked(), &[true, true, false]);
    assert_eq!(state.master(), MasterState::Checked);
}

#[test]
fn master_click_from_indeterminate_selects_all_open() {
    let issues = scenario();
    let mut state = SelectionState::new(&issues);
    state.toggle_row(1);
    state.toggle_master();
    assert_eq!(state.master(), MasterState::Checked);
    assert_eq!(state.selected_total(), 15);
}

#[test]
fn master_click_from_checked_clears() {
    let issues = scenario();
    let mut state = SelectionState::new(&issues);
    state.toggle_master();
    state.toggle_master();
    assert_eq!(state.checked(), &[false, false, false]);
    assert_eq!(state.master(), MasterState::Unchecked);
}

#[test]
fn no_open_issues_stays_unchecked() {
    let issues = issues_from(&[(false, 1), (false, 2)]);
    let mut state = SelectionState::new(&issues);
    state.set_all(true);
    assert_eq!(state.selected_total(), 0);
    assert_eq!(state.master(), MasterState::Unchecked);
    state.toggle_master();
    assert_eq!(state.master(), MasterState::Unchecked);
}

#[test]
fn empty_list() {
    let mut state = SelectionState::new(&[]);
    assert!(state.is_empty());
    state.set_all(true);
    assert_eq!(state.master(), MasterState::Unchecked);
    assert_eq!(state.summary_caption(), "None selected");
}

#[test]
#[should_panic(expected = "out of range")]
fn out_of_range_toggle_panics() {
    let issues = scenario();
    let mut state = SelectionState::new(&issues);
    state.toggle_row(3);
}

// ===========================================================================
// Properties
// ===========================================================================

#[derive(Debug, Clone)]
enum Op {
    Toggle(prop::sample::Index),
    SetAll(bool),
    Master,
}

fn rows_strategy() -> impl Strategy<Value = Vec<(bool, i64)>> {
    prop::collection::vec(
        (
            any::<bool>(),
            prop_oneof![-1_000i64..1_000, any::<i64>()],
        ),
        0..12,
    )
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<prop::sample::Index>().prop_map(Op::Toggle),
        any::<bool>().prop_map(Op::SetAll),
        Just(Op::Master),
    ]
}

fn apply(state: &mut SelectionState, op: &Op) {
    match op {
        Op::Toggle(idx) => {
            if !state.is_empty() {
                state.toggle_row(idx.index(state.len()));
            }
        }
        Op::SetAll(selected) => state.set_all(*selected),
        Op::Master => state.toggle_master(),
    }
}

proptest! {
    #[test]
    fn prop_initial_state(rows in rows_strategy()) {
        let issues = issues_from(&rows);
        let state = SelectionState::new(&issues);
        prop_assert!(state.checked().iter().all(|c| !c));
        prop_assert_eq!(state.selected_total(), 0);
        prop_assert_eq!(state.master(), MasterState::Unchecked);
    }

    #[test]
    fn prop_invariants_hold_after_any_sequence(
        rows in rows_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let issues = issues_from(&rows);
        let mut state = SelectionState::new(&issues);
        for op in &ops {
            apply(&mut state, op);

            for (i, issue) in issues.iter().enumerate() {
                if !issue.is_open() {
                    prop_assert!(!state.is_checked(i), "resolved row {} checked", i);
                }
            }
            prop_assert_eq!(state.selected_total(), expected_total(&issues, &state));
            prop_assert_eq!(state.master(), expected_master(&issues, &state));
        }
    }

    #[test]
    fn prop_resolved_rows_are_immune(
        rows in rows_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
    ) {
        let issues = issues_from(&rows);
        let mut state = SelectionState::new(&issues);
        for op in &ops {
            apply(&mut state, op);
        }
        for (i, issue) in issues.iter().enumerate() {
            if !issue.is_open() {
                let before = state.clone();
                state.toggle_row(i);
                prop_assert_eq!(&state, &before);
            }
        }
    }

    #[test]
    fn prop_set_all_is_idempotent(
        rows in rows_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
        selected in any::<bool>(),
    ) {
        let issues = issues_from(&rows);
        let mut state = SelectionState::new(&issues);
        for op in &ops {
            apply(&mut state, op);
        }
        state.set_all(selected);
        let once = state.clone();
        state.set_all(selected);
        prop_assert_eq!(state, once);
    }

    #[test]
    fn prop_toggle_is_self_inverse(
        rows in rows_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let issues = issues_from(&rows);
        let mut state = SelectionState::new(&issues);
        for op in &ops {
            apply(&mut state, op);
        }
        let open: Vec<usize> = (0..issues.len()).filter(|&i| state.is_selectable(i)).collect();
        prop_assume!(!open.is_empty());
        let i = open[pick.index(open.len())];

        let before = state.clone();
        state.toggle_row(i);
        prop_assert_ne!(state.is_checked(i), before.is_checked(i));
        state.toggle_row(i);
        prop_assert_eq!(state, before);
    }
}
