//! Medicaid utilization from worksheet S-3 part I (`S300001`).

use std::collections::BTreeMap;

use hcris_model::{AlphaFact, CellValue, ColumnCode, LineNum, MetricTable, NumericFact, WorksheetCode};

use crate::error::Result;
use crate::select::{line_column_name, select_line, select_lines, unstack_lines};
use crate::worksheet::extract_worksheet;

/// Day-count lines summed into the utilization numerator.
pub const MEDICAID_DAY_LINES: [u32; 3] = [200, 1400, 3200];

/// Internal column holding the all-payer total days (column `00800`).
pub const TOTAL_DAYS_COLUMN: &str = "col_00800";

/// Internal column holding the derived ratio.
pub const UTILIZATION_COLUMN: &str = "medicaid_utilization";

/// Builds the Medicaid utilization table: the three day-count lines at
/// column `00700` unstacked into columns, outer-joined with the line-1400
/// total at column `00800`, missing inputs filled to zero, and the ratio
/// `(v200 + v1400 + v3200) / v00800` derived per record.
///
/// A zero denominator yields the explicit NaN marker for that record, not
/// zero and not an error.
pub fn medicaid_utilization(
    alpha: &[AlphaFact],
    numeric: &[NumericFact],
) -> Result<MetricTable> {
    let code = WorksheetCode::new("S300001")?;
    let table = extract_worksheet(&code, alpha, numeric)?;

    let day_lines: Vec<LineNum> = MEDICAID_DAY_LINES.iter().map(|line| LineNum::new(*line)).collect();
    let day_column = ColumnCode::new("00700")?;
    let total_column = ColumnCode::new("00800")?;

    let days = unstack_lines(&select_lines(&table, &day_lines, &day_column)?, &day_lines)?;
    let totals = MetricTable::from_series(
        TOTAL_DAYS_COLUMN,
        select_line(&table, LineNum::new(1400), &total_column)?,
    );

    let mut joined = days.outer_join(totals)?;
    joined.fill_missing_with_zero();

    let mut ratios = BTreeMap::new();
    for (record, cells) in joined.rows() {
        let day_sum: f64 = day_lines
            .iter()
            .map(|line| {
                cells
                    .get(&line_column_name(*line))
                    .map(|cell| cell.number_or(0.0))
                    .unwrap_or(0.0)
            })
            .sum();
        let total = cells
            .get(TOTAL_DAYS_COLUMN)
            .map(|cell| cell.number_or(0.0))
            .unwrap_or(0.0);
        let ratio = if total == 0.0 { f64::NAN } else { day_sum / total };
        ratios.insert(*record, CellValue::Number(ratio));
    }

    Ok(joined.outer_join(MetricTable::from_series(UTILIZATION_COLUMN, ratios))?)
}

/// Internal column order this builder contributes to the joined metrics.
pub(crate) fn output_columns() -> Vec<String> {
    let mut columns: Vec<String> = MEDICAID_DAY_LINES
        .iter()
        .map(|line| line_column_name(LineNum::new(*line)))
        .collect();
    columns.push(TOTAL_DAYS_COLUMN.to_string());
    columns.push(UTILIZATION_COLUMN.to_string());
    columns
}
