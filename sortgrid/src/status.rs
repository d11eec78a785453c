//! Per-column sort status

use serde::Deserialize;
use serde::Serialize;

/// The sort status of a single column.
///
/// Statuses advance along a fixed cycle: `Unsorted` -> `Ascending` ->
/// `Descending` -> back to `Unsorted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortStatus {
    /// Not taking part in sorting.
    #[default]
    Unsorted,
    /// Smallest values first.
    Ascending,
    /// Largest values first.
    Descending,
}

impl SortStatus {
    /// Returns the next status in the cycle.
    pub fn cycled(self) -> Self {
        match self {
            SortStatus::Unsorted => SortStatus::Ascending,
            SortStatus::Ascending => SortStatus::Descending,
            SortStatus::Descending => SortStatus::Unsorted,
        }
    }

    /// Returns `true` if a column with this status takes part in sorting.
    pub fn is_active(self) -> bool {
        !matches!(self, SortStatus::Unsorted)
    }

    /// Returns the status name for log output.
    pub fn label(self) -> &'static str {
        match self {
            SortStatus::Unsorted => "unsorted",
            SortStatus::Ascending => "ascending",
            SortStatus::Descending => "descending",
        }
    }
}
