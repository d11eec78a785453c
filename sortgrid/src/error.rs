//! Error types

/// Error type for sort configuration validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The same column appears more than once in the header set.
    #[error("Column '{column}' appears more than once in the header set")]
    DuplicateColumn { column: String },

    /// An initial sort column is not part of the header set.
    #[error("Initial sort column '{column}' is not in the header set")]
    UnknownInitialSort { column: String },

    /// The same column appears more than once in the initial sort list.
    #[error("Initial sort column '{column}' appears more than once")]
    DuplicateInitialSort { column: String },

    /// A disabled column is not part of the header set.
    #[error("Disabled column '{column}' is not in the header set")]
    UnknownDisabled { column: String },

    /// An initial sort column is also disabled.
    #[error("Initial sort column '{column}' is disabled")]
    DisabledInitialSort { column: String },
}

impl ConfigError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(column: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            column: column.into(),
        }
    }

    /// Creates a new unknown initial sort column error.
    pub fn unknown_initial_sort(column: impl Into<String>) -> Self {
        Self::UnknownInitialSort {
            column: column.into(),
        }
    }

    /// Creates a new duplicate initial sort column error.
    pub fn duplicate_initial_sort(column: impl Into<String>) -> Self {
        Self::DuplicateInitialSort {
            column: column.into(),
        }
    }

    /// Creates a new unknown disabled column error.
    pub fn unknown_disabled(column: impl Into<String>) -> Self {
        Self::UnknownDisabled {
            column: column.into(),
        }
    }

    /// Creates a new disabled initial sort column error.
    pub fn disabled_initial_sort(column: impl Into<String>) -> Self {
        Self::DisabledInitialSort {
            column: column.into(),
        }
    }
}

/// Error type for typed field access on [`Record`](crate::Record).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// No field with this name exists in the record.
    #[error("Record has no field '{field}'")]
    Missing { field: String },

    /// The field exists but holds a different type than requested.
    #[error("Field '{field}' holds {actual}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new type mismatch error.
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}
