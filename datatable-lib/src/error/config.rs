//! Construction-time configuration errors

/// Errors raised while validating a [`TableConfig`](crate::view::TableConfig).
///
/// Every variant is fatal: the table is not built and nothing is rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No display surface was provided.
    #[error("No render target provided")]
    MissingTarget,

    /// The table has no columns.
    #[error("At least one column is required")]
    NoColumns,

    /// Two columns read the same field.
    #[error("Duplicate column field '{field}'")]
    DuplicateColumn { field: String },

    /// The initial sort names a field no column reads.
    #[error("Sort field '{field}' does not match any column")]
    UnknownSortField { field: String },

    /// A fixed page size of zero.
    #[error("Page size must be at least 1")]
    InvalidPageSize,
}

impl ConfigError {
    /// Creates a new duplicate column error.
    pub fn duplicate_column(field: impl Into<String>) -> Self {
        Self::DuplicateColumn {
            field: field.into(),
        }
    }

    /// Creates a new unknown sort field error.
    pub fn unknown_sort_field(field: impl Into<String>) -> Self {
        Self::UnknownSortField {
            field: field.into(),
        }
    }
}
