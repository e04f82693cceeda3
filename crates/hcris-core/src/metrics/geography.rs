//! Urban/rural geography indicator from worksheet `S200001`.

use hcris_model::{AlphaFact, ColumnCode, LineNum, MetricTable, NumericFact, WorksheetCode};

use crate::error::Result;
use crate::select::select_line;
use crate::worksheet::extract_worksheet;

pub const GEO_COLUMN: &str = "GEO";

/// Geography indicator: line 2600, column `00100`.
pub fn geography(alpha: &[AlphaFact], numeric: &[NumericFact]) -> Result<MetricTable> {
    let code = WorksheetCode::new("S200001")?;
    let table = extract_worksheet(&code, alpha, numeric)?;
    let series = select_line(&table, LineNum::new(2600), &ColumnCode::new("00100")?)?;
    Ok(MetricTable::from_series(GEO_COLUMN, series))
}
