//! CLI error types

use std::io;
use std::path::PathBuf;

use datatable_lib::error::ConfigError;

use crate::table_file::ColumnKind;

/// Errors that stop the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Reading the table file or stdin failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The table file could not be read.
    #[error("Failed to read {path}: {source}")]
    ReadTable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The table file is not valid JSON for a table.
    #[error("Invalid table file: {0}")]
    Json(#[from] serde_json::Error),

    /// A cell value does not fit its column kind.
    #[error("Row {row}: field '{field}' is not a valid {kind}: {value}")]
    InvalidCell {
        row: usize,
        field: String,
        kind: ColumnKind,
        value: String,
    },

    /// Logger setup failed.
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// The table configuration was rejected.
    #[error("Invalid table configuration: {0}")]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Creates a new invalid cell error.
    pub fn invalid_cell(
        row: usize,
        field: impl Into<String>,
        kind: ColumnKind,
        value: &serde_json::Value,
    ) -> Self {
        Self::InvalidCell {
            row,
            field: field.into(),
            kind,
            value: value.to_string(),
        }
    }
}
