//! Sortable Scoreboard Example
//!
//! Drives a small scoreboard table through header clicks: plain clicks
//! sort by one column, ctrl-clicks add columns to the sort, and the id
//! column stays unsortable.

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use sortgrid::{CellValue, Record, SortState, SortStatus, sort_rows, toggle};

const HEADERS: [&str; 5] = ["id", "name", "family", "city", "score"];
const DISABLED: [&str; 1] = ["id"];

/// Modifier keys a host input layer reports alongside a click.
#[derive(Clone, Copy)]
struct Modifiers {
    ctrl: bool,
    alt: bool,
}

const PLAIN: Modifiers = Modifiers {
    ctrl: false,
    alt: false,
};
const CTRL: Modifiers = Modifiers {
    ctrl: true,
    alt: false,
};

impl Modifiers {
    /// Additive sorting is requested by holding Ctrl or Alt.
    fn multi_select(self) -> bool {
        self.ctrl || self.alt
    }
}

/// Create the sample rows for the scoreboard.
fn create_rows() -> Vec<Record> {
    let raw = [
        (1, "jack", "hanson", "sydney", 100),
        (2, "pieter", "street", "melbourne", 200),
        (3, "joe", "larson", "brisbane", 300),
        (4, "simon", "long", "perth", 400),
        (5, "abraham", "blue", "darwin", 500),
    ];

    raw.into_iter()
        .map(|(id, name, family, city, score)| {
            Record::new()
                .set("id", id)
                .set("name", name)
                .set("family", family)
                .set("city", city)
                .set("score", score)
        })
        .collect()
}

/// Apply a header click and report it.
fn click(state: &SortState, column: &str, modifiers: Modifiers) -> SortState {
    let suffix = if modifiers.multi_select() {
        " (ctrl held)"
    } else {
        ""
    };
    println!("\nclick '{}'{}", column, suffix);

    toggle(state, column, modifiers.multi_select(), &DISABLED)
}

/// Header text with a sort marker and, for multi-column sorts, the
/// priority number.
fn header_label(state: &SortState, column: &str) -> String {
    let marker = match state.status(column) {
        SortStatus::Unsorted => "",
        SortStatus::Ascending => " ^",
        SortStatus::Descending => " v",
    };
    match state.badge(column) {
        Some(badge) => format!("{}{}{}", column, marker, badge),
        None => format!("{}{}", column, marker),
    }
}

fn cell_text(row: &Record, column: &str) -> String {
    match row.get(column) {
        Some(CellValue::Int(n)) => n.to_string(),
        Some(CellValue::Float(n)) => n.to_string(),
        Some(CellValue::Text(s)) => s.clone(),
        Some(CellValue::Bool(b)) => b.to_string(),
        Some(CellValue::Null) | None => String::new(),
    }
}

fn print_table(state: &SortState, rows: &[Record]) {
    let sorted = sort_rows(rows, state);

    let mut header_line = String::new();
    for column in HEADERS {
        header_line.push_str(&format!("{:<12}", header_label(state, column)));
    }
    println!("{}", header_line);

    for row in &sorted {
        let mut line = String::new();
        for column in HEADERS {
            line.push_str(&format!("{:<12}", cell_text(row, column)));
        }
        println!("{}", line);
    }
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("scoreboard.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let rows = create_rows();
    let state = SortState::initialize(&HEADERS, &["name"], &DISABLED)
        .expect("scoreboard configuration is valid");

    println!("initial state: sorted by name");
    print_table(&state, &rows);

    // Add score as a second sort key
    let state = click(&state, "score", CTRL);
    print_table(&state, &rows);

    // Flip name to descending without losing score
    let state = click(&state, "name", CTRL);
    print_table(&state, &rows);

    // A plain click collapses the sort to city alone
    let state = click(&state, "city", PLAIN);
    print_table(&state, &rows);

    // Clicks on the disabled id column change nothing
    let state = click(&state, "id", PLAIN);
    print_table(&state, &rows);

    // Two more plain clicks walk city through descending back to unsorted
    let state = click(&state, "city", PLAIN);
    print_table(&state, &rows);

    let state = click(&state, "city", PLAIN);
    print_table(&state, &rows);

    Ok(())
}
