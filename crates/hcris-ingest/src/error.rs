//! Error types for archive ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced while opening an archive or decoding its members.
/// All of them abort the run before any metric computation.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to open archive {}: {source}", path.display())]
    ArchiveOpen {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
    #[error("archive member not found: {member}")]
    MissingMember { member: String },
    #[error("{member} row {row}: expected {expected} columns, found {found}")]
    ColumnCount {
        member: String,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{member} row {row}: cannot parse {value:?} as {what}")]
    Parse {
        member: String,
        row: usize,
        value: String,
        what: &'static str,
    },
    #[error("failed to read {member}: {source}")]
    Csv {
        member: String,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
