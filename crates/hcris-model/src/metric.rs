#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use crate::{CellValue, ModelError, RecordId};

/// A small wide table of named metric columns keyed by record id.
///
/// A single metric series is a one-column `MetricTable`. Column order is
/// insertion order and is preserved by joins; it drives the positional
/// rename onto the canonical output schema.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MetricTable {
    columns: Vec<String>,
    rows: BTreeMap<RecordId, BTreeMap<String, CellValue>>,
}

impl MetricTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table with named columns and no rows. Used when an optional
    /// metric is treated as all-missing instead of failing the run.
    pub fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: BTreeMap::new(),
        }
    }

    pub fn from_series(name: impl Into<String>, series: BTreeMap<RecordId, CellValue>) -> Self {
        let name = name.into();
        let rows = series
            .into_iter()
            .map(|(record, value)| {
                let mut cells = BTreeMap::new();
                cells.insert(name.clone(), value);
                (record, cells)
            })
            .collect();
        Self {
            columns: vec![name],
            rows,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn record_ids(&self) -> BTreeSet<RecordId> {
        self.rows.keys().copied().collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&RecordId, &BTreeMap<String, CellValue>)> {
        self.rows.iter()
    }

    pub fn get(&self, record: RecordId, column: &str) -> Option<&CellValue> {
        self.rows.get(&record).and_then(|cells| cells.get(column))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Outer join on record id: the result keeps the union of record ids
    /// and the concatenated column list. Cells absent on either side stay
    /// absent (read back as missing); nothing is dropped or defaulted.
    /// A column name present on both sides is an error, not a shadow.
    pub fn outer_join(self, other: MetricTable) -> Result<MetricTable, ModelError> {
        let mut columns = self.columns;
        for column in other.columns {
            if columns.contains(&column) {
                return Err(ModelError::DuplicateMetricColumn(column));
            }
            columns.push(column);
        }
        let mut rows = self.rows;
        for (record, cells) in other.rows {
            rows.entry(record).or_default().extend(cells);
        }
        Ok(MetricTable { columns, rows })
    }

    /// Materializes `Number(0.0)` into every absent or `Missing` cell so
    /// downstream arithmetic sees a total table. NaN cells are computed
    /// values and are left alone.
    pub fn fill_missing_with_zero(&mut self) {
        let columns = self.columns.clone();
        for cells in self.rows.values_mut() {
            for column in &columns {
                let cell = cells.entry(column.clone()).or_insert(CellValue::Missing);
                if cell.is_missing() {
                    *cell = CellValue::Number(0.0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str, entries: &[(u64, f64)]) -> MetricTable {
        let map = entries
            .iter()
            .map(|(record, value)| (RecordId::new(*record), CellValue::Number(*value)))
            .collect();
        MetricTable::from_series(name, map)
    }

    #[test]
    fn outer_join_keeps_union_of_records() {
        let left = series("a", &[(1, 1.0), (2, 2.0)]);
        let right = series("b", &[(2, 20.0), (3, 30.0)]);
        let joined = left.outer_join(right).unwrap();

        assert_eq!(joined.columns(), &["a".to_string(), "b".to_string()]);
        assert_eq!(joined.record_ids().len(), 3);
        // present on one side only: the other cell is absent, not zero
        assert_eq!(joined.get(RecordId::new(1), "b"), None);
        assert_eq!(joined.get(RecordId::new(3), "a"), None);
        assert_eq!(
            joined.get(RecordId::new(2), "b"),
            Some(&CellValue::Number(20.0))
        );
    }

    #[test]
    fn outer_join_rejects_duplicate_column() {
        let left = series("a", &[(1, 1.0)]);
        let right = series("a", &[(1, 2.0)]);
        assert_eq!(
            left.outer_join(right),
            Err(ModelError::DuplicateMetricColumn("a".to_string()))
        );
    }

    #[test]
    fn fill_materializes_zeroes_but_keeps_nan() {
        let left = series("a", &[(1, 1.0)]);
        let mut nan_cells = BTreeMap::new();
        nan_cells.insert(RecordId::new(2), CellValue::Number(f64::NAN));
        let right = MetricTable::from_series("b", nan_cells);

        let mut joined = left.outer_join(right).unwrap();
        joined.fill_missing_with_zero();

        assert_eq!(
            joined.get(RecordId::new(1), "b"),
            Some(&CellValue::Number(0.0))
        );
        assert_eq!(
            joined.get(RecordId::new(2), "a"),
            Some(&CellValue::Number(0.0))
        );
        let undefined = joined.get(RecordId::new(2), "b").unwrap();
        assert!(undefined.number_or(0.0).is_nan());
    }
}
