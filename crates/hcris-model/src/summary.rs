#![deny(unsafe_code)]

use crate::{CellValue, RecordId};

/// Name of the leading index column in the output file.
pub const RECORD_ID_COLUMN: &str = "RPT_REC_NUM";

/// Canonical output schema, in order. `TOT_HOSP` is the Medicaid total
/// hospital days (S-3 column 00700); `TOT_HOSP_DAYS` is the all-payer
/// total (column 00800).
pub const SUMMARY_COLUMNS: [&str; 17] = [
    "PRVDR_NUM",
    "FY_END_DT",
    "HMO",
    "TOT_HOSP",
    "LAB_DEL_DAYS",
    "TOT_HOSP_DAYS",
    "MED_UTIL",
    "SSI_PER",
    "CST_TO_CHG",
    "MED_CHG",
    "MED_CST",
    "CHAR_CHG",
    "CHAR_CST",
    "TOT_UNR_UNC",
    "URBAN_RURAL",
    "STATES",
    "DSH_PAT_PER",
];

pub fn summary_column_index(name: &str) -> Option<usize> {
    SUMMARY_COLUMNS.iter().position(|column| *column == name)
}

/// One output row: the record id plus one cell per canonical column.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SummaryRow {
    pub record_id: RecordId,
    pub values: Vec<CellValue>,
}

/// The final summarized table, one row per distinct record id, sorted by
/// record id so reruns are byte-identical.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns() -> &'static [&'static str] {
        &SUMMARY_COLUMNS
    }

    pub fn push_row(&mut self, row: SummaryRow) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn value(&self, record: RecordId, column: &str) -> Option<&CellValue> {
        let index = summary_column_index(column)?;
        self.rows
            .iter()
            .find(|row| row.record_id == record)
            .and_then(|row| row.values.get(index))
    }
}
