use std::cmp::Ordering;

use sortgrid::{CellValue, Record, SortState, SortableRow, compare_rows, sort_rows};

/// Three-row fixture shared by the ordering tests: two rows tie on name,
/// two tie on score.
fn match_rows() -> Vec<Record> {
    vec![
        Record::new().set("id", 1).set("name", "b").set("score", 10),
        Record::new().set("id", 2).set("name", "a").set("score", 10),
        Record::new().set("id", 3).set("name", "a").set("score", 5),
    ]
}

fn ids(rows: &[Record]) -> Vec<i64> {
    rows.iter()
        .map(|row| match row.get("id") {
            Some(CellValue::Int(id)) => *id,
            _ => panic!("fixture rows carry int ids"),
        })
        .collect()
}

fn state_for(initial_sort: &[&str]) -> SortState {
    SortState::initialize(&["id", "name", "score"], initial_sort, &[]).unwrap()
}

// ============================================================================
// Single and multi key ordering
// ============================================================================

#[test]
fn test_single_key_ascending() {
    let state = state_for(&["name"]);
    assert_eq!(ids(&sort_rows(&match_rows(), &state)), [2, 3, 1]);
}

#[test]
fn test_single_key_descending() {
    // Ascending -> descending on the same column
    let state = state_for(&["name"]).reset_and_cycle("name");
    assert_eq!(ids(&sort_rows(&match_rows(), &state)), [1, 2, 3]);
}

#[test]
fn test_two_keys_break_ties_in_priority_order() {
    let state = state_for(&["name"]).cycle_within_priority("score");
    assert_eq!(ids(&sort_rows(&match_rows(), &state)), [3, 2, 1]);
}

#[test]
fn test_three_key_precedence() {
    let rows = vec![
        Record::new().set("id", 1).set("a", 1).set("b", 1).set("c", 2),
        Record::new().set("id", 2).set("a", 1).set("b", 1).set("c", 1),
        Record::new().set("id", 3).set("a", 1).set("b", 0).set("c", 9),
    ];
    let state = SortState::initialize(&["id", "a", "b", "c"], &["a", "b", "c"], &[]).unwrap();

    assert_eq!(ids(&sort_rows(&rows, &state)), [3, 2, 1]);
}

// ============================================================================
// Stability
// ============================================================================

#[test]
fn test_empty_priority_keeps_input_order() {
    let state = state_for(&[]);
    assert_eq!(ids(&sort_rows(&match_rows(), &state)), [1, 2, 3]);
}

#[test]
fn test_equal_keys_keep_input_order() {
    let rows = vec![
        Record::new().set("id", 1).set("city", "perth"),
        Record::new().set("id", 2).set("city", "perth"),
        Record::new().set("id", 3).set("city", "perth"),
        Record::new().set("id", 4).set("city", "darwin"),
    ];
    let state = SortState::initialize(&["id", "city"], &["city"], &[]).unwrap();

    assert_eq!(ids(&sort_rows(&rows, &state)), [4, 1, 2, 3]);
}

#[test]
fn test_sort_is_idempotent() {
    let state = state_for(&["name"]);

    let once = sort_rows(&match_rows(), &state);
    let twice = sort_rows(&once, &state);

    assert_eq!(once, twice);
}

// ============================================================================
// Degenerate inputs
// ============================================================================

#[test]
fn test_empty_rows() {
    let state = state_for(&["name"]);
    assert!(sort_rows::<Record>(&[], &state).is_empty());
}

#[test]
fn test_single_row() {
    let state = state_for(&["name"]);
    let one = vec![Record::new().set("id", 9).set("name", "x").set("score", 0)];

    assert_eq!(ids(&sort_rows(&one, &state)), [9]);
}

// ============================================================================
// Comparator
// ============================================================================

#[test]
fn test_compare_rows_direct() {
    let state = state_for(&["score"]);
    let rows = match_rows();

    assert_eq!(compare_rows(&rows[2], &rows[0], &state), Ordering::Less);
    assert_eq!(compare_rows(&rows[0], &rows[1], &state), Ordering::Equal);
    assert_eq!(compare_rows(&rows[0], &rows[2], &state), Ordering::Greater);
}

#[test]
fn test_mixed_type_column_orders_by_type_rank() {
    let rows = vec![
        Record::new().set("id", 1).set("v", "text"),
        Record::new().set("id", 2).set("v", 7),
        Record::new().set("id", 3).set("v", CellValue::Null),
        Record::new().set("id", 4).set("v", true),
    ];
    let state = SortState::initialize(&["id", "v"], &["v"], &[]).unwrap();

    assert_eq!(ids(&sort_rows(&rows, &state)), [3, 4, 2, 1]);
}

#[test]
#[should_panic(expected = "no value for sort column")]
fn test_missing_value_panics() {
    let rows = vec![
        Record::new().set("id", 1).set("name", "jack"),
        Record::new().set("id", 2),
    ];
    let state = SortState::initialize(&["id", "name"], &["name"], &[]).unwrap();

    sort_rows(&rows, &state);
}

// ============================================================================
// Typed rows
// ============================================================================

#[derive(Clone)]
struct Player {
    name: &'static str,
    score: f64,
}

impl SortableRow for Player {
    fn sort_value(&self, column: &str) -> Option<CellValue> {
        match column {
            "name" => Some(CellValue::from(self.name)),
            "score" => Some(CellValue::from(self.score)),
            _ => None,
        }
    }
}

#[test]
fn test_typed_rows_sort_like_records() {
    let players = vec![
        Player { name: "jack", score: 100.0 },
        Player { name: "abraham", score: 500.0 },
        Player { name: "simon", score: 400.0 },
    ];
    let state = SortState::initialize(&["name", "score"], &["score"], &[]).unwrap();

    let sorted = sort_rows(&players, &state);
    let names: Vec<&str> = sorted.iter().map(|p| p.name).collect();

    assert_eq!(names, ["jack", "simon", "abraham"]);
}
