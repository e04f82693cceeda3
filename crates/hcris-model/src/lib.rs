pub mod error;
pub mod facts;
pub mod ids;
pub mod metric;
pub mod options;
pub mod report;
pub mod summary;
pub mod value;
pub mod worksheet;

pub use error::ModelError;
pub use facts::{AlphaFact, ArchiveTables, NumericFact};
pub use ids::{ColumnCode, LineNum, RecordId, WorksheetCode};
pub use metric::MetricTable;
pub use options::{FillPolicy, MissingMetricPolicy, SummarizeOptions};
pub use report::{REPORT_DATE_FORMAT, ReportRecord};
pub use summary::{RECORD_ID_COLUMN, SUMMARY_COLUMNS, SummaryRow, SummaryTable, summary_column_index};
pub use value::{CellValue, format_numeric};
pub use worksheet::WorksheetTable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worksheet_code_rejects_blank() {
        assert!(WorksheetCode::new("  ").is_err());
        assert_eq!(WorksheetCode::new(" S300001 ").unwrap().as_str(), "S300001");
    }

    #[test]
    fn cell_value_serializes() {
        let cell = CellValue::Number(0.75);
        let json = serde_json::to_string(&cell).expect("serialize cell");
        let round: CellValue = serde_json::from_str(&json).expect("deserialize cell");
        assert_eq!(round, cell);
    }

    #[test]
    fn fact_round_trips_through_json() {
        let fact = NumericFact::new(
            RecordId::new(5),
            WorksheetCode::new("S300001").unwrap(),
            LineNum::new(200),
            ColumnCode::new("00700").unwrap(),
            12.5,
        );
        let json = serde_json::to_string(&fact).expect("serialize fact");
        let round: NumericFact = serde_json::from_str(&json).expect("deserialize fact");
        assert_eq!(round, fact);
    }
}
