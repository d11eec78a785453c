//! Sort state: per-column statuses plus the active-sort priority list

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::status::SortStatus;

/// Sort state for a fixed set of columns.
///
/// Holds one [`SortStatus`] per column plus the priority list of actively
/// sorted columns, oldest activation first. The state is a plain value:
/// transitions never touch `self`, they return the successor state, and
/// the caller owns every copy.
///
/// A column is in the priority list exactly when its status is not
/// `Unsorted`. Naming a column outside the header set is a caller bug
/// and panics.
///
/// # Example
///
/// ```
/// use sortgrid::{SortState, SortStatus};
///
/// let state = SortState::initialize(&["name", "score"], &["name"], &[]).unwrap();
/// assert_eq!(state.status("name"), SortStatus::Ascending);
/// assert_eq!(state.priority(), ["name"]);
///
/// let state = state.cycle_within_priority("score");
/// assert_eq!(state.priority(), ["name", "score"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Status per column, total over the header set.
    status: HashMap<String, SortStatus>,
    /// Actively sorted columns, oldest first.
    priority: Vec<String>,
}

impl SortState {
    /// Builds the initial state for a header set.
    ///
    /// Every column starts `Unsorted` except the `initial_sort` columns,
    /// which start `Ascending` and enter the priority list in the given
    /// order. `disabled` columns must be part of the header set and may
    /// not be initially sorted.
    pub fn initialize(
        headers: &[&str],
        initial_sort: &[&str],
        disabled: &[&str],
    ) -> Result<Self, ConfigError> {
        let mut status = HashMap::with_capacity(headers.len());
        for column in headers {
            if status
                .insert(column.to_string(), SortStatus::Unsorted)
                .is_some()
            {
                return Err(ConfigError::duplicate_column(*column));
            }
        }

        for column in disabled {
            if !status.contains_key(*column) {
                return Err(ConfigError::unknown_disabled(*column));
            }
        }

        let mut priority: Vec<String> = Vec::with_capacity(initial_sort.len());
        for column in initial_sort {
            if !status.contains_key(*column) {
                return Err(ConfigError::unknown_initial_sort(*column));
            }
            if disabled.contains(column) {
                return Err(ConfigError::disabled_initial_sort(*column));
            }
            if priority.iter().any(|c| c.as_str() == *column) {
                return Err(ConfigError::duplicate_initial_sort(*column));
            }
            status.insert(column.to_string(), SortStatus::Ascending);
            priority.push(column.to_string());
        }

        Ok(Self { status, priority })
    }

    /// Resets every column to `Unsorted`, then advances `column` one step
    /// from the status it had before the reset. The priority list shrinks
    /// to the clicked column alone, or to nothing when its cycle wrapped
    /// back to `Unsorted`.
    ///
    /// Panics if `column` is not in the header set.
    pub fn reset_and_cycle(&self, column: &str) -> SortState {
        let next = self.status(column).cycled();

        let mut status: HashMap<String, SortStatus> = self
            .status
            .keys()
            .map(|c| (c.clone(), SortStatus::Unsorted))
            .collect();
        status.insert(column.to_string(), next);

        let priority = if next.is_active() {
            vec![column.to_string()]
        } else {
            Vec::new()
        };

        log::debug!("[sort] reset_and_cycle '{}' -> {}", column, next.label());

        SortState { status, priority }
    }

    /// Advances `column` one cycle step, leaving every other column
    /// alone. Entering `Ascending` appends the column to the priority
    /// list, wrapping to `Unsorted` removes it, and flipping between
    /// directions keeps its position.
    ///
    /// Panics if `column` is not in the header set.
    pub fn cycle_within_priority(&self, column: &str) -> SortState {
        let next = self.status(column).cycled();

        let mut state = self.clone();
        state.status.insert(column.to_string(), next);
        if next.is_active() {
            if !state.priority.iter().any(|c| c.as_str() == column) {
                state.priority.push(column.to_string());
            }
        } else {
            state.priority.retain(|c| c.as_str() != column);
        }

        log::debug!(
            "[sort] cycle_within_priority '{}' -> {}",
            column,
            next.label()
        );

        state
    }

    /// Returns the status of a column.
    ///
    /// Panics if `column` is not in the header set.
    pub fn status(&self, column: &str) -> SortStatus {
        match self.status.get(column) {
            Some(status) => *status,
            None => panic!("column '{}' is not in the header set", column),
        }
    }

    /// Returns `true` if the column is part of the header set.
    pub fn contains(&self, column: &str) -> bool {
        self.status.contains_key(column)
    }

    /// Returns `true` if the column takes part in sorting.
    ///
    /// Panics if `column` is not in the header set.
    pub fn is_active(&self, column: &str) -> bool {
        self.status(column).is_active()
    }

    /// Returns the actively sorted columns, oldest first.
    pub fn priority(&self) -> &[String] {
        &self.priority
    }

    /// Returns the zero-based priority position of a column, if active.
    pub fn rank(&self, column: &str) -> Option<usize> {
        self.priority.iter().position(|c| c.as_str() == column)
    }

    /// Returns the one-based priority number a header should display.
    /// Present only while two or more columns are actively sorted.
    pub fn badge(&self, column: &str) -> Option<usize> {
        if self.priority.len() < 2 {
            return None;
        }
        self.rank(column).map(|rank| rank + 1)
    }

    /// Number of columns in the header set.
    pub fn column_count(&self) -> usize {
        self.status.len()
    }
}
