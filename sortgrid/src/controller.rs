//! Toggle handling: header gestures in, successor states out

use crate::state::SortState;

/// Applies a header toggle to a sort state and returns the successor.
///
/// A toggle on a disabled column changes nothing. Otherwise a plain
/// toggle (`multi_select == false`) resets every other column and cycles
/// the clicked one, while a multi-select toggle cycles the clicked
/// column in place and keeps the rest of the priority list. The host
/// decides `multi_select`, typically from a modifier chord.
///
/// Panics if `column` is neither disabled nor in the header set.
pub fn toggle(state: &SortState, column: &str, multi_select: bool, disabled: &[&str]) -> SortState {
    if disabled.contains(&column) {
        log::debug!("[sort] toggle on disabled column '{}' ignored", column);
        return state.clone();
    }

    log::trace!("[sort] toggle '{}' multi_select={}", column, multi_select);
    if multi_select {
        state.cycle_within_priority(column)
    } else {
        state.reset_and_cycle(column)
    }
}
