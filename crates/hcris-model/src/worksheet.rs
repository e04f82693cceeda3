#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use crate::{CellValue, ColumnCode, LineNum, RecordId, WorksheetCode};

/// One worksheet pivoted wide: rows keyed by `(record, line)`, one column
/// per distinct column code observed for the worksheet.
///
/// Cells are sparse. A coordinate that was never inserted reads back as
/// absent; the pivot never aggregates: the extractor treats a second
/// insert at an occupied `(record, line, column)` slot as a schema
/// violation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorksheetTable {
    code: WorksheetCode,
    columns: BTreeSet<ColumnCode>,
    rows: BTreeMap<(RecordId, LineNum), BTreeMap<ColumnCode, CellValue>>,
}

impl WorksheetTable {
    pub fn new(code: WorksheetCode) -> Self {
        Self {
            code,
            columns: BTreeSet::new(),
            rows: BTreeMap::new(),
        }
    }

    pub fn code(&self) -> &WorksheetCode {
        &self.code
    }

    pub fn has_column(&self, column: &ColumnCode) -> bool {
        self.columns.contains(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &ColumnCode> {
        self.columns.iter()
    }

    /// Places one pivoted cell. Returns `false` (without modifying the
    /// table) when the `(record, line, column)` slot is already occupied.
    pub fn insert(
        &mut self,
        record: RecordId,
        line: LineNum,
        column: ColumnCode,
        value: CellValue,
    ) -> bool {
        let cells = self.rows.entry((record, line)).or_default();
        if cells.contains_key(&column) {
            return false;
        }
        cells.insert(column.clone(), value);
        self.columns.insert(column);
        true
    }

    pub fn value(&self, record: RecordId, line: LineNum, column: &ColumnCode) -> Option<&CellValue> {
        self.rows.get(&(record, line)).and_then(|cells| cells.get(column))
    }

    pub fn rows(
        &self,
    ) -> impl Iterator<Item = (&(RecordId, LineNum), &BTreeMap<ColumnCode, CellValue>)> {
        self.rows.iter()
    }

    pub fn record_ids(&self) -> BTreeSet<RecordId> {
        self.rows.keys().map(|(record, _)| *record).collect()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> WorksheetTable {
        WorksheetTable::new(WorksheetCode::new("S300001").unwrap())
    }

    #[test]
    fn insert_rejects_occupied_slot() {
        let mut table = table();
        let column = ColumnCode::new("00700").unwrap();
        assert!(table.insert(
            RecordId::new(1),
            LineNum::new(200),
            column.clone(),
            CellValue::Number(10.0),
        ));
        assert!(!table.insert(
            RecordId::new(1),
            LineNum::new(200),
            column.clone(),
            CellValue::Number(11.0),
        ));
        // first value wins; the caller surfaces the violation
        assert_eq!(
            table.value(RecordId::new(1), LineNum::new(200), &column),
            Some(&CellValue::Number(10.0))
        );
    }

    #[test]
    fn record_ids_collapse_lines() {
        let mut table = table();
        let column = ColumnCode::new("00700").unwrap();
        table.insert(RecordId::new(7), LineNum::new(200), column.clone(), CellValue::Missing);
        table.insert(RecordId::new(7), LineNum::new(1400), column.clone(), CellValue::Missing);
        table.insert(RecordId::new(9), LineNum::new(200), column, CellValue::Missing);
        assert_eq!(table.row_count(), 3);
        assert_eq!(table.record_ids().len(), 2);
    }
}
