use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid worksheet code: {0:?}")]
    InvalidWorksheetCode(String),
    #[error("invalid column code: {0:?}")]
    InvalidColumnCode(String),
    #[error("metric column already present: {0}")]
    DuplicateMetricColumn(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
