//! Row seam and the dynamic map-backed row

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::FieldError;
use crate::value::CellValue;

/// Trait for rows the sorter can order.
///
/// `sort_value` returns the orderable value a row holds for a column, or
/// `None` when the row has no value for it. The sorter treats `None` for
/// a column it consults as a caller bug and panics.
///
/// # Example
///
/// ```
/// use sortgrid::{CellValue, SortableRow};
///
/// #[derive(Clone)]
/// struct Player {
///     name: String,
///     score: f64,
/// }
///
/// impl SortableRow for Player {
///     fn sort_value(&self, column: &str) -> Option<CellValue> {
///         match column {
///             "name" => Some(CellValue::from(self.name.as_str())),
///             "score" => Some(CellValue::from(self.score)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait SortableRow {
    /// Returns the value this row holds for the given column.
    fn sort_value(&self, column: &str) -> Option<CellValue>;
}

/// A dynamic row backed by a field map.
///
/// Useful when rows arrive as loosely typed data instead of a dedicated
/// struct. Serializes as a plain JSON object.
///
/// # Example
///
/// ```
/// use sortgrid::Record;
///
/// let row = Record::new()
///     .set("name", "jack")
///     .set("score", 100);
///
/// assert!(row.contains("score"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, CellValue>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<CellValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<CellValue> {
        self.fields.remove(field)
    }

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, CellValue> {
        &self.fields
    }

    // =========================================================================
    // Typed getters
    //
    // Missing fields and type mismatches are Err; a present
    // CellValue::Null is Ok(None).
    // =========================================================================

    /// Gets a text field value.
    pub fn get_text(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(CellValue::Null) => Ok(None),
            Some(CellValue::Text(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::type_mismatch(field, "text", other.type_name())),
        }
    }

    /// Gets an integer field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(CellValue::Null) => Ok(None),
            Some(CellValue::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::type_mismatch(field, "int", other.type_name())),
        }
    }

    /// Gets a float field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(CellValue::Null) => Ok(None),
            Some(CellValue::Float(n)) => Ok(Some(*n)),
            Some(CellValue::Int(n)) => Ok(Some(*n as f64)), // Allow widening
            Some(other) => Err(FieldError::type_mismatch(field, "float", other.type_name())),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(CellValue::Null) => Ok(None),
            Some(CellValue::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::type_mismatch(field, "bool", other.type_name())),
        }
    }
}

impl SortableRow for Record {
    fn sort_value(&self, column: &str) -> Option<CellValue> {
        self.fields.get(column).cloned()
    }
}
