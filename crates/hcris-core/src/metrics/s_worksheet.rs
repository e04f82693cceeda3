//! Uncompensated-care fields from worksheet S-10 (`S100000`).

use hcris_model::{AlphaFact, ColumnCode, LineNum, MetricTable, NumericFact, WorksheetCode};

use crate::error::Result;
use crate::select::select_line;
use crate::worksheet::extract_worksheet;

/// The six S-10 selections: (column name, line, column code).
pub const S_WORKSHEET_FIELDS: [(&str, u32, &str); 6] = [
    ("CST_TO_CHG", 100, "00100"),
    ("MED_CHG", 600, "00100"),
    ("MED_CST", 700, "00100"),
    ("CHAR_CHG", 2000, "00300"),
    ("CHAR_CST", 2300, "00300"),
    ("TOT_UNR_UNC", 3100, "00100"),
];

/// Builds the six S-10 fields, combined by outer join on record id.
/// Record presence may differ per selection, so nothing assumes the six
/// series align.
pub fn s_worksheet_fields(alpha: &[AlphaFact], numeric: &[NumericFact]) -> Result<MetricTable> {
    let code = WorksheetCode::new("S100000")?;
    let table = extract_worksheet(&code, alpha, numeric)?;

    let mut out = MetricTable::new();
    for (name, line, column) in S_WORKSHEET_FIELDS {
        let series = select_line(&table, LineNum::new(line), &ColumnCode::new(column)?)?;
        out = out.outer_join(MetricTable::from_series(name, series))?;
    }
    Ok(out)
}

pub(crate) fn output_columns() -> Vec<String> {
    S_WORKSHEET_FIELDS
        .iter()
        .map(|(name, _, _)| (*name).to_string())
        .collect()
}
