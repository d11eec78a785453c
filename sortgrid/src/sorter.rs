//! Stable multi-key row ordering

use std::cmp::Ordering;

use crate::record::SortableRow;
use crate::state::SortState;
use crate::status::SortStatus;
use crate::value::CellValue;

/// Compares two rows under a sort state's priority list.
///
/// Columns are consulted in priority order and the first one whose
/// values differ decides, with descending columns reversed. Rows equal
/// under every active column compare `Equal`.
///
/// Panics if a row has no value for a consulted column.
pub fn compare_rows<T: SortableRow>(a: &T, b: &T, state: &SortState) -> Ordering {
    for column in state.priority() {
        let ord = match state.status(column) {
            SortStatus::Ascending => value_of(a, column).cmp(&value_of(b, column)),
            SortStatus::Descending => value_of(b, column).cmp(&value_of(a, column)),
            // The priority list never holds unsorted columns
            SortStatus::Unsorted => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Returns the rows ordered under the sort state.
///
/// One stable sorting pass with [`compare_rows`] as the comparator: rows
/// equal under every active column keep their input order, and an empty
/// priority list returns the input order untouched. The input slice is
/// never mutated.
pub fn sort_rows<T: SortableRow + Clone>(rows: &[T], state: &SortState) -> Vec<T> {
    let mut sorted = rows.to_vec();
    if state.priority().is_empty() {
        return sorted;
    }

    log::trace!(
        "[sort] ordering {} rows by {:?}",
        sorted.len(),
        state.priority()
    );
    sorted.sort_by(|a, b| compare_rows(a, b, state));
    sorted
}

fn value_of<T: SortableRow>(row: &T, column: &str) -> CellValue {
    match row.sort_value(column) {
        Some(value) => value,
        None => panic!("row has no value for sort column '{}'", column),
    }
}
