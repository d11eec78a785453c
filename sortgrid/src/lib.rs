//! View-agnostic sort state for interactive tables
//!
//! Tri-state column sorting with an ordered multi-column priority list,
//! pure state transitions, and a stable multi-key row sorter. Hosts feed
//! header toggles in and read statuses, priorities, and ordered rows
//! back out.

pub mod controller;
pub mod error;
pub mod record;
pub mod sorter;
pub mod state;
pub mod status;
pub mod value;

pub use controller::toggle;
pub use error::{ConfigError, FieldError};
pub use record::{Record, SortableRow};
pub use sorter::{compare_rows, sort_rows};
pub use state::SortState;
pub use status::SortStatus;
pub use value::CellValue;
