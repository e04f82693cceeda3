#![deny(unsafe_code)]

use crate::report::ReportRecord;
use crate::{ColumnCode, LineNum, RecordId, WorksheetCode};

/// One sparse text observation from the `_ALPHA` member, keyed by the full
/// (record, worksheet, line, column) coordinate.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AlphaFact {
    pub record: RecordId,
    pub worksheet: WorksheetCode,
    pub line: LineNum,
    pub column: ColumnCode,
    pub value: String,
}

impl AlphaFact {
    pub fn new(
        record: RecordId,
        worksheet: WorksheetCode,
        line: LineNum,
        column: ColumnCode,
        value: impl Into<String>,
    ) -> Self {
        Self {
            record,
            worksheet,
            line,
            column,
            value: value.into(),
        }
    }
}

/// One sparse numeric observation from the `_NMRC` member.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NumericFact {
    pub record: RecordId,
    pub worksheet: WorksheetCode,
    pub line: LineNum,
    pub column: ColumnCode,
    pub value: f64,
}

impl NumericFact {
    pub fn new(
        record: RecordId,
        worksheet: WorksheetCode,
        line: LineNum,
        column: ColumnCode,
        value: f64,
    ) -> Self {
        Self {
            record,
            worksheet,
            line,
            column,
            value,
        }
    }
}

/// The three raw tables decoded from one cost-report archive.
#[derive(Debug, Clone, Default)]
pub struct ArchiveTables {
    pub reports: Vec<ReportRecord>,
    pub alpha: Vec<AlphaFact>,
    pub numeric: Vec<NumericFact>,
}
