//! In-memory expense store
//!
//! Owns the session's expense records in display order, together with the
//! edit state and the direction of the next date sort. None of the
//! operations fail: bad input ends up in the data (NaN amounts, unreadable
//! dates) and references to records that no longer exist are no-ops.

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::models::date::compare_chronological;
use crate::models::{Amount, Expense, ExpenseId, ExpenseRecord, Instant};

use super::totals::CategoryTotals;

/// Whether a record is staged for in-place replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditState {
    /// The next commit appends a new record
    #[default]
    Idle,
    /// The next commit replaces the record with this id
    Editing(ExpenseId),
}

impl EditState {
    /// Check if an edit is pending
    pub fn is_editing(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// The record being edited, if any
    pub fn target(&self) -> Option<ExpenseId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(*id),
        }
    }
}

/// Chronological direction for date sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Oldest first
    #[default]
    Ascending,
    /// Newest first
    Descending,
}

impl SortDirection {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Order two instants in this direction
    ///
    /// Unreadable dates go last in both directions.
    pub fn compare(self, a: Option<Instant>, b: Option<Instant>) -> Ordering {
        match (self, a, b) {
            (Self::Descending, Some(a), Some(b)) => b.cmp(&a),
            _ => compare_chronological(a, b),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// What a commit did with the submitted expense
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Appended as a new record
    Added(ExpenseId),
    /// Replaced the contents of the record being edited
    Replaced(ExpenseId),
}

impl CommitOutcome {
    /// Id of the record that now holds the expense
    pub fn id(&self) -> ExpenseId {
        match self {
            Self::Added(id) | Self::Replaced(id) => *id,
        }
    }
}

/// The session's expense records
#[derive(Debug)]
pub struct ExpenseStore {
    records: Vec<ExpenseRecord>,
    edit: EditState,
    next_sort: SortDirection,
    next_id: ExpenseId,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            edit: EditState::Idle,
            next_sort: SortDirection::Ascending,
            next_id: ExpenseId::from_raw(1),
        }
    }

    /// Records in display order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Current edit state
    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    /// Direction the next date sort will use
    pub fn next_sort_direction(&self) -> SortDirection {
        self.next_sort
    }

    /// Get a record's expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .map(|r| &r.expense)
    }

    /// Current display position of a record
    pub fn position(&self, id: ExpenseId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Id of the record at a display position
    pub fn id_at(&self, index: usize) -> Option<ExpenseId> {
        self.records.get(index).map(|r| r.id)
    }

    /// Append an expense as a new record
    pub fn add(&mut self, expense: Expense) -> ExpenseId {
        let id = self.next_id;
        self.next_id = id.next();

        debug!(%id, name = %expense.name, amount = %expense.amount, "Adding expense");
        self.records.push(ExpenseRecord::new(id, expense));
        id
    }

    /// Stage a record for replacement and return its current contents
    ///
    /// Starting a new edit while another is pending simply retargets it.
    /// Unknown ids leave the edit state alone and return `None`.
    pub fn begin_edit(&mut self, id: ExpenseId) -> Option<&Expense> {
        let index = self.position(id)?;
        self.edit = EditState::Editing(id);

        debug!(%id, "Editing expense");
        Some(&self.records[index].expense)
    }

    /// Stage the record at a display position for replacement
    pub fn begin_edit_at(&mut self, index: usize) -> Option<&Expense> {
        let id = self.id_at(index)?;
        self.begin_edit(id)
    }

    /// Submit an expense: replace the record being edited, or append
    pub fn commit_edit(&mut self, expense: Expense) -> CommitOutcome {
        match self.edit {
            EditState::Editing(id) => {
                self.edit = EditState::Idle;
                // Removal clears a matching edit, so the target is present
                if let Some(index) = self.position(id) {
                    info!(%id, "Replacing expense");
                    self.records[index].expense = expense;
                    CommitOutcome::Replaced(id)
                } else {
                    CommitOutcome::Added(self.add(expense))
                }
            }
            EditState::Idle => CommitOutcome::Added(self.add(expense)),
        }
    }

    /// Drop a pending edit; returns whether one was pending
    pub fn cancel_edit(&mut self) -> bool {
        let was_editing = self.edit.is_editing();
        self.edit = EditState::Idle;
        was_editing
    }

    /// Remove a record by id
    ///
    /// Later records move up one position. A pending edit of the removed
    /// record is cancelled; an edit of any other record stays pending.
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.position(id)?;
        let record = self.records.remove(index);

        if self.edit == EditState::Editing(id) {
            debug!(%id, "Cancelling edit of removed expense");
            self.edit = EditState::Idle;
        }

        info!(%id, remaining = self.records.len(), "Removed expense");
        Some(record.expense)
    }

    /// Remove the record at a display position
    pub fn remove_at(&mut self, index: usize) -> Option<Expense> {
        let id = self.id_at(index)?;
        self.remove(id)
    }

    /// Sum of every record's amount
    pub fn total(&self) -> Amount {
        Self::total_of(&self.records)
    }

    /// Sum of the amounts in any list of records, such as a filter result
    pub fn total_of(records: &[ExpenseRecord]) -> Amount {
        records.iter().map(|r| r.expense.amount).sum()
    }

    /// Amounts summed per category
    pub fn category_totals(&self) -> CategoryTotals {
        CategoryTotals::from_records(&self.records)
    }

    /// Sort records by date, alternating direction on each call
    ///
    /// The first call sorts oldest first. The sort is stable, so records with
    /// equal dates keep their relative order, and records with unreadable
    /// dates stay together at the end.
    pub fn sort_by_date_toggled(&mut self) -> &[ExpenseRecord] {
        let direction = self.next_sort;

        let mut keyed: Vec<(Option<Instant>, ExpenseRecord)> = self
            .records
            .drain(..)
            .map(|r| (r.expense.date.instant(), r))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| direction.compare(*a, *b));
        self.records = keyed.into_iter().map(|(_, r)| r).collect();

        self.next_sort = direction.toggled();
        debug!(%direction, count = self.records.len(), "Sorted expenses by date");

        &self.records
    }

    /// Records dated within `[start, end]`, bounds included
    ///
    /// Leaves the store untouched. A range whose start is after its end
    /// matches nothing, and records with unreadable dates never match.
    pub fn filter_by_date_range(&self, start: Instant, end: Instant) -> Vec<ExpenseRecord> {
        self.records
            .iter()
            .filter(|r| r.expense.date.within(start, end))
            .cloned()
            .collect()
    }
}
