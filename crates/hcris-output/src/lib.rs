//! Delimited-text output for the summarized cost report table.
//!
//! The file carries a header row (`RPT_REC_NUM` plus the canonical
//! columns) and one row per record. Numbers print without a trailing
//! `.0` when integral, missing cells print empty, and the undefined
//! marker prints as the literal `NaN`, so a written table reads back
//! cell-for-cell.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};

use hcris_model::{
    CellValue, RECORD_ID_COLUMN, RecordId, SUMMARY_COLUMNS, SummaryRow, SummaryTable,
};

pub fn write_summary<W: Write>(writer: W, table: &SummaryTable) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = Vec::with_capacity(SUMMARY_COLUMNS.len() + 1);
    header.push(RECORD_ID_COLUMN);
    header.extend_from_slice(&SUMMARY_COLUMNS);
    csv_writer.write_record(&header)?;

    for row in &table.rows {
        let mut record = Vec::with_capacity(row.values.len() + 1);
        record.push(row.record_id.to_string());
        record.extend(row.values.iter().map(CellValue::render));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn write_summary_file(path: &Path, table: &SummaryTable) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create output file: {}", path.display()))?;
    write_summary(file, table)
        .with_context(|| format!("write summary table: {}", path.display()))
}

/// Reads a written summary table back. The header must match the
/// canonical schema exactly; cells parse as numbers where possible,
/// empty as missing, and anything else as text.
pub fn read_summary<R: Read>(reader: R) -> Result<SummaryTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut expected = Vec::with_capacity(SUMMARY_COLUMNS.len() + 1);
    expected.push(RECORD_ID_COLUMN);
    expected.extend_from_slice(&SUMMARY_COLUMNS);
    let found: Vec<&str> = headers.iter().collect();
    if found != expected {
        bail!("unexpected summary header: {found:?}");
    }

    let mut table = SummaryTable::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let raw_id = record.get(0).unwrap_or("");
        let record_id: u64 = raw_id
            .parse()
            .with_context(|| format!("row {}: bad record id {raw_id:?}", idx + 1))?;
        let values = record
            .iter()
            .skip(1)
            .map(parse_cell)
            .collect::<Vec<CellValue>>();
        if values.len() != SUMMARY_COLUMNS.len() {
            bail!(
                "row {}: expected {} columns, found {}",
                idx + 1,
                SUMMARY_COLUMNS.len(),
                values.len()
            );
        }
        table.push_row(SummaryRow {
            record_id: RecordId::new(record_id),
            values,
        });
    }
    Ok(table)
}

pub fn read_summary_file(path: &Path) -> Result<SummaryTable> {
    let file = File::open(path)
        .with_context(|| format!("open summary file: {}", path.display()))?;
    read_summary(file).with_context(|| format!("read summary table: {}", path.display()))
}

fn parse_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Missing;
    }
    if raw == "NaN" {
        return CellValue::Number(f64::NAN);
    }
    match raw.parse::<f64>() {
        Ok(value) => CellValue::Number(value),
        Err(_) => CellValue::Text(raw.to_string()),
    }
}
