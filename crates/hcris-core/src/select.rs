//! Field selection: scalar values per record id out of a wide worksheet.

use std::collections::BTreeMap;

use hcris_model::worksheet::WorksheetTable;
use hcris_model::{CellValue, ColumnCode, LineNum, MetricTable, RecordId};

use crate::error::{CoreError, Result};

/// Name of the unstacked column for one worksheet line.
pub fn line_column_name(line: LineNum) -> String {
    format!("line_{line}")
}

fn require_column(table: &WorksheetTable, column: &ColumnCode) -> Result<()> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(CoreError::KeyNotFound {
            worksheet: table.code().clone(),
            column: column.clone(),
        })
    }
}

/// Selects one column at a single line across every record id.
///
/// The line level collapses out of the result key: the map holds one value
/// per record id that carries the requested line. A record whose row
/// exists but leaves the cell unset reads as `Missing`; a record without
/// the line at all is absent from the map.
///
/// An absent column code is a [`CoreError::KeyNotFound`], never a silently
/// empty result.
pub fn select_line(
    table: &WorksheetTable,
    line: LineNum,
    column: &ColumnCode,
) -> Result<BTreeMap<RecordId, CellValue>> {
    require_column(table, column)?;
    let mut out = BTreeMap::new();
    for ((record, row_line), cells) in table.rows() {
        if *row_line == line {
            let value = cells.get(column).cloned().unwrap_or(CellValue::Missing);
            out.insert(*record, value);
        }
    }
    Ok(out)
}

/// Selects one column at a set of lines; the result keeps one entry per
/// `(record, line)` and the caller reshapes (see [`unstack_lines`]) before
/// joining with single-line selections.
pub fn select_lines(
    table: &WorksheetTable,
    lines: &[LineNum],
    column: &ColumnCode,
) -> Result<BTreeMap<(RecordId, LineNum), CellValue>> {
    require_column(table, column)?;
    let mut out = BTreeMap::new();
    for ((record, row_line), cells) in table.rows() {
        if lines.contains(row_line) {
            let value = cells.get(column).cloned().unwrap_or(CellValue::Missing);
            out.insert((*record, *row_line), value);
        }
    }
    Ok(out)
}

/// Pivots the line level of a multi-line selection into one named column
/// per requested line, keyed by record id.
pub fn unstack_lines(
    selection: &BTreeMap<(RecordId, LineNum), CellValue>,
    lines: &[LineNum],
) -> Result<MetricTable> {
    let mut table = MetricTable::new();
    for line in lines {
        let series: BTreeMap<RecordId, CellValue> = selection
            .iter()
            .filter(|((_, row_line), _)| row_line == line)
            .map(|((record, _), value)| (*record, value.clone()))
            .collect();
        table = table
            .outer_join(MetricTable::from_series(line_column_name(*line), series))
            .map_err(CoreError::from)?;
    }
    Ok(table)
}
