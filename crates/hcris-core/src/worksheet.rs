//! Worksheet extraction: long facts to one wide table per worksheet.

use hcris_model::{AlphaFact, CellValue, NumericFact, WorksheetCode};
use hcris_model::worksheet::WorksheetTable;

use crate::error::{CoreError, Result};

/// Filters both fact tables to one worksheet code and pivots them wide.
///
/// Each source pivots on column code into `(record, line)`-keyed rows; the
/// two pivots are then outer-joined: a `(record, line)` row present in
/// only one source is kept, and cells absent from either side stay unset
/// (not zero) at this stage. The worksheet-code column disappears from the
/// result since it is constant.
///
/// A second observation for an occupied `(record, line, column)` slot
/// (within either source, or colliding across the two) is a
/// [`CoreError::SchemaViolation`]: the pivot is a pure reshape and never
/// aggregates.
///
/// Pure function of its inputs; extracting twice yields identical tables.
pub fn extract_worksheet(
    code: &WorksheetCode,
    alpha: &[AlphaFact],
    numeric: &[NumericFact],
) -> Result<WorksheetTable> {
    let mut table = WorksheetTable::new(code.clone());

    for fact in alpha.iter().filter(|fact| fact.worksheet == *code) {
        let value = CellValue::Text(fact.value.clone());
        if !table.insert(fact.record, fact.line, fact.column.clone(), value) {
            return Err(CoreError::SchemaViolation {
                worksheet: code.clone(),
                record: fact.record,
                line: fact.line,
                column: fact.column.clone(),
            });
        }
    }

    for fact in numeric.iter().filter(|fact| fact.worksheet == *code) {
        let value = CellValue::Number(fact.value);
        if !table.insert(fact.record, fact.line, fact.column.clone(), value) {
            return Err(CoreError::SchemaViolation {
                worksheet: code.clone(),
                record: fact.record,
                line: fact.line,
                column: fact.column.clone(),
            });
        }
    }

    Ok(table)
}
