//! Error types for the summarization pipeline.

use thiserror::Error;

use hcris_model::{ColumnCode, LineNum, ModelError, RecordId, WorksheetCode};

/// Pipeline errors. Every variant is fatal to the current run; the
/// front-end decides whether to retry with corrected input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A worksheet pivot met the same (record, line, column) key twice;
    /// the input is corrupt and no aggregation choice would be right.
    #[error(
        "duplicate cell in worksheet {worksheet}: record {record}, line {line}, column {column}"
    )]
    SchemaViolation {
        worksheet: WorksheetCode,
        record: RecordId,
        line: LineNum,
        column: ColumnCode,
    },
    /// A metric asked for a column code the reshaped worksheet does not
    /// carry.
    #[error("worksheet {worksheet} has no column {column}")]
    KeyNotFound {
        worksheet: WorksheetCode,
        column: ColumnCode,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
