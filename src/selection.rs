use crate::types::Issue;

// ---------------------------------------------------------------------------
// Master checkbox tri-state
// ---------------------------------------------------------------------------

/// State of the header "select all" control, always derived from the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MasterState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl MasterState {
    /// Derive the master state from the open-row counts.
    ///
    /// Zero open rows is `Unchecked`, never `Indeterminate`.
    pub fn from_counts(selected_open: usize, open: usize) -> Self {
        if selected_open == 0 {
            Self::Unchecked
        } else if selected_open == open {
            Self::Checked
        } else {
            Self::Indeterminate
        }
    }
}

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

/// The per-row facts the selection rules need, captured at mount time.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RowFacts {
    open: bool,
    value: i64,
}

/// Checkbox selection over a fixed issue list.
///
/// Rows are addressed by their position in the list the state was built
/// from. `selected_total` and `master` are recomputed from `checked` after
/// every mutation and are never updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    rows: Vec<RowFacts>,
    checked: Vec<bool>,
    /// Widened so that any number of `i64` values sums without overflow.
    selected_total: i128,
    master: MasterState,
}

impl SelectionState {
    /// Fresh state for `issues`: nothing checked, total 0, master unchecked.
    pub fn new(issues: &[Issue]) -> Self {
        let rows = issues
            .iter()
            .map(|issue| RowFacts {
                open: issue.is_open(),
                value: issue.value,
            })
            .collect::<Vec<_>>();
        let checked = vec![false; rows.len()];
        Self {
            rows,
            checked,
            selected_total: 0,
            master: MasterState::Unchecked,
        }
    }

    /// Flip the checkbox of the row at `index`.
    ///
    /// Resolved rows are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn toggle_row(&mut self, index: usize) {
        assert!(
            index < self.rows.len(),
            "row index {index} out of range for {} issues",
            self.rows.len()
        );
        if !self.rows[index].open {
            tracing::debug!(index, "ignoring toggle on resolved issue");
            return;
        }
        self.checked[index] = !self.checked[index];
        self.recompute();
        tracing::debug!(
            index,
            checked = self.checked[index],
            total = self.selected_total,
            master = ?self.master,
            "toggled row"
        );
    }

    /// Check (or uncheck) every open row. Resolved rows always end up unchecked.
    pub fn set_all(&mut self, selected: bool) {
        for (checked, row) in self.checked.iter_mut().zip(&self.rows) {
            *checked = selected && row.open;
        }
        self.recompute();
        tracing::debug!(
            selected,
            total = self.selected_total,
            master = ?self.master,
            "set all rows"
        );
    }

    /// Apply a click on the master control: select everything unless every
    /// open row is already selected, in which case clear the selection.
    pub fn toggle_master(&mut self) {
        self.set_all(self.master != MasterState::Checked);
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Whether the row at `index` accepts a checkbox toggle.
    pub fn is_selectable(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(|r| r.open)
    }

    pub fn checked(&self) -> &[bool] {
        &self.checked
    }

    pub fn selected_total(&self) -> i128 {
        self.selected_total
    }

    pub fn master(&self) -> MasterState {
        self.master
    }

    pub fn open_count(&self) -> usize {
        self.rows.iter().filter(|r| r.open).count()
    }

    pub fn selected_open_count(&self) -> usize {
        self.rows
            .iter()
            .zip(&self.checked)
            .filter(|(row, checked)| row.open && **checked)
            .count()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header caption next to the master control.
    pub fn summary_caption(&self) -> String {
        if self.selected_total == 0 {
            "None selected".to_owned()
        } else {
            format!("Selected {}", self.selected_total)
        }
    }

    fn recompute(&mut self) {
        self.selected_total = self
            .rows
            .iter()
            .zip(&self.checked)
            .filter(|(row, checked)| row.open && **checked)
            .map(|(row, _)| i128::from(row.value))
            .sum();
        self.master = MasterState::from_counts(self.selected_open_count(), self.open_count());
    }
}
