//! Import/export error types.

use thiserror::Error;

use invopt_core::DomainError;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file format {0:?} (expected .csv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("CSV parse failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel parse failed: {0}")]
    Excel(String),

    /// One or more of the exchange columns is absent from the header row.
    #[error("file must include these columns: {expected:?} (missing: {missing:?})")]
    SchemaMismatch {
        expected: Vec<String>,
        missing: Vec<String>,
    },

    #[error("row {row}, column {column}: invalid value {value:?}")]
    InvalidField {
        row: usize,
        column: String,
        value: String,
    },

    #[error("row {row}: invalid SKU label {value:?}: {reason}")]
    InvalidLabel {
        row: usize,
        value: String,
        reason: String,
    },

    /// The imported table violates a store rule (duplicate SKU labels).
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported export format {0:?} (expected .csv or .xlsx)")]
    UnsupportedFormat(String),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
