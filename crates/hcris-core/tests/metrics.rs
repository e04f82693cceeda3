use hcris_core::CoreError;
use hcris_core::metrics::{
    GEO_COLUMN, SSI_COLUMN, TOTAL_DAYS_COLUMN, UTILIZATION_COLUMN, geography,
    medicaid_utilization, s_worksheet_fields, ssi_percentage,
};
use hcris_model::{
    AlphaFact, CellValue, ColumnCode, LineNum, NumericFact, RecordId, WorksheetCode,
};

fn wk(code: &str) -> WorksheetCode {
    WorksheetCode::new(code).expect("worksheet code")
}

fn col(code: &str) -> ColumnCode {
    ColumnCode::new(code).expect("column code")
}

fn nfact(record: u64, worksheet: &str, line: u32, column: &str, value: f64) -> NumericFact {
    NumericFact::new(
        RecordId::new(record),
        wk(worksheet),
        LineNum::new(line),
        col(column),
        value,
    )
}

fn afact(record: u64, worksheet: &str, line: u32, column: &str, value: &str) -> AlphaFact {
    AlphaFact::new(
        RecordId::new(record),
        wk(worksheet),
        LineNum::new(line),
        col(column),
        value,
    )
}

#[test]
fn medicaid_utilization_derives_the_ratio() {
    let numeric = vec![
        nfact(1, "S300001", 200, "00700", 10.0),
        nfact(1, "S300001", 1400, "00700", 5.0),
        nfact(1, "S300001", 3200, "00700", 0.0),
        nfact(1, "S300001", 1400, "00800", 20.0),
    ];

    let table = medicaid_utilization(&[], &numeric).expect("build metric");

    assert_eq!(
        table.get(RecordId::new(1), UTILIZATION_COLUMN),
        Some(&CellValue::Number(0.75))
    );
    assert_eq!(
        table.get(RecordId::new(1), TOTAL_DAYS_COLUMN),
        Some(&CellValue::Number(20.0))
    );
}

#[test]
fn medicaid_zero_denominator_is_nan_not_zero() {
    let numeric = vec![
        nfact(2, "S300001", 200, "00700", 10.0),
        nfact(2, "S300001", 1400, "00800", 0.0),
    ];

    let table = medicaid_utilization(&[], &numeric).expect("build metric");

    let ratio = table
        .get(RecordId::new(2), UTILIZATION_COLUMN)
        .expect("ratio cell");
    assert!(ratio.number_or(0.0).is_nan());
}

#[test]
fn medicaid_missing_day_lines_fill_to_zero() {
    let numeric = vec![
        nfact(3, "S300001", 200, "00700", 10.0),
        nfact(3, "S300001", 1400, "00800", 20.0),
    ];

    let table = medicaid_utilization(&[], &numeric).expect("build metric");

    assert_eq!(
        table.get(RecordId::new(3), UTILIZATION_COLUMN),
        Some(&CellValue::Number(0.5))
    );
}

#[test]
fn ssi_percentage_selects_its_coordinate() {
    let numeric = vec![
        nfact(1, "E00A18A", 3000, "00100", 0.05),
        nfact(2, "E00A18A", 3000, "00100", 0.10),
        nfact(2, "E00A18A", 100, "00100", 99.0),
    ];

    let table = ssi_percentage(&[], &numeric).expect("build metric");

    assert_eq!(table.columns(), &[SSI_COLUMN.to_string()]);
    assert_eq!(
        table.get(RecordId::new(1), SSI_COLUMN),
        Some(&CellValue::Number(0.05))
    );
    assert_eq!(table.row_count(), 2);
}

#[test]
fn absent_column_code_is_key_not_found() {
    // worksheet exists, but only with column 00200
    let numeric = vec![nfact(1, "E00A18A", 3000, "00200", 0.05)];

    let err = ssi_percentage(&[], &numeric).unwrap_err();
    match err {
        CoreError::KeyNotFound { worksheet, column } => {
            assert_eq!(worksheet.as_str(), "E00A18A");
            assert_eq!(column.as_str(), "00100");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn geography_is_named_geo() {
    let alpha = vec![afact(1, "S200001", 2600, "00100", "1")];

    let table = geography(&alpha, &[]).expect("build metric");

    assert_eq!(table.columns(), &[GEO_COLUMN.to_string()]);
    assert_eq!(
        table.get(RecordId::new(1), GEO_COLUMN),
        Some(&CellValue::Text("1".to_string()))
    );
}

#[test]
fn s_fields_outer_join_mismatched_record_presence() {
    let numeric = vec![
        nfact(1, "S100000", 100, "00100", 0.5),
        nfact(2, "S100000", 600, "00100", 1000.0),
        nfact(1, "S100000", 2000, "00300", 250.0),
        nfact(1, "S100000", 2300, "00300", 125.0),
        nfact(1, "S100000", 700, "00100", 500.0),
        nfact(1, "S100000", 3100, "00100", 75.0),
    ];

    let table = s_worksheet_fields(&[], &numeric).expect("build metric");

    assert_eq!(table.row_count(), 2);
    assert_eq!(
        table.get(RecordId::new(1), "CST_TO_CHG"),
        Some(&CellValue::Number(0.5))
    );
    assert_eq!(
        table.get(RecordId::new(2), "MED_CHG"),
        Some(&CellValue::Number(1000.0))
    );
    // record 2 only reported one field; the rest stay absent
    assert_eq!(table.get(RecordId::new(2), "CST_TO_CHG"), None);
    assert_eq!(table.get(RecordId::new(1), "MED_CHG"), None);
}
