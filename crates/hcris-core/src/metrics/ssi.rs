//! SSI percentage from worksheet `E00A18A`.

use hcris_model::{AlphaFact, ColumnCode, LineNum, MetricTable, NumericFact, WorksheetCode};

use crate::error::Result;
use crate::select::select_line;
use crate::worksheet::extract_worksheet;

pub const SSI_COLUMN: &str = "ssi_percentage";

/// SSI percentage: line 3000, column `00100`.
pub fn ssi_percentage(alpha: &[AlphaFact], numeric: &[NumericFact]) -> Result<MetricTable> {
    let code = WorksheetCode::new("E00A18A")?;
    let table = extract_worksheet(&code, alpha, numeric)?;
    let series = select_line(&table, LineNum::new(3000), &ColumnCode::new("00100")?)?;
    Ok(MetricTable::from_series(SSI_COLUMN, series))
}
