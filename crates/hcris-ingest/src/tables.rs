//! Positional decoding of the three fixed-schema archive members.
//!
//! The members carry no header row; columns are assigned by position.
//! `_ALPHA` and `_NMRC` are the sparse fact tables
//! (`RPT_REC_NUM, WKSHT_CD, LINE_NUM, CLMN_NUM, value`); `_RPT` is the
//! 18-column report index.

use std::io::Read;

use csv::ReaderBuilder;

use hcris_model::{
    AlphaFact, ColumnCode, LineNum, NumericFact, RecordId, ReportRecord, WorksheetCode,
};

use crate::error::{IngestError, Result};

/// Column count of the `_ALPHA` and `_NMRC` members.
pub const FACT_COLUMNS: usize = 5;
/// Column count of the `_RPT` member.
pub const REPORT_COLUMNS: usize = 18;

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn read_rows<R: Read>(member: &str, reader: R, expected: usize) -> Result<Vec<Vec<String>>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::Csv {
            member: member.to_string(),
            source,
        })?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(|value| value.is_empty()) {
            continue;
        }
        if row.len() != expected {
            return Err(IngestError::ColumnCount {
                member: member.to_string(),
                row: idx + 1,
                expected,
                found: row.len(),
            });
        }
        rows.push(row);
    }
    Ok(rows)
}

fn parse_u64(member: &str, row: usize, value: &str, what: &'static str) -> Result<u64> {
    value.parse::<u64>().map_err(|_| IngestError::Parse {
        member: member.to_string(),
        row,
        value: value.to_string(),
        what,
    })
}

fn parse_u32(member: &str, row: usize, value: &str, what: &'static str) -> Result<u32> {
    value.parse::<u32>().map_err(|_| IngestError::Parse {
        member: member.to_string(),
        row,
        value: value.to_string(),
        what,
    })
}

fn parse_f64(member: &str, row: usize, value: &str, what: &'static str) -> Result<f64> {
    value.parse::<f64>().map_err(|_| IngestError::Parse {
        member: member.to_string(),
        row,
        value: value.to_string(),
        what,
    })
}

fn parse_fact_key(
    member: &str,
    row_num: usize,
    row: &[String],
) -> Result<(RecordId, WorksheetCode, LineNum, ColumnCode)> {
    let record = RecordId::new(parse_u64(member, row_num, &row[0], "record id")?);
    let worksheet = WorksheetCode::new(row[1].as_str()).map_err(|_| IngestError::Parse {
        member: member.to_string(),
        row: row_num,
        value: row[1].clone(),
        what: "worksheet code",
    })?;
    let line = LineNum::new(parse_u32(member, row_num, &row[2], "line number")?);
    let column = ColumnCode::new(row[3].as_str()).map_err(|_| IngestError::Parse {
        member: member.to_string(),
        row: row_num,
        value: row[3].clone(),
        what: "column code",
    })?;
    Ok((record, worksheet, line, column))
}

pub fn read_alpha_facts<R: Read>(member: &str, reader: R) -> Result<Vec<AlphaFact>> {
    let rows = read_rows(member, reader, FACT_COLUMNS)?;
    let mut facts = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let (record, worksheet, line, column) = parse_fact_key(member, idx + 1, row)?;
        facts.push(AlphaFact::new(record, worksheet, line, column, row[4].clone()));
    }
    Ok(facts)
}

pub fn read_numeric_facts<R: Read>(member: &str, reader: R) -> Result<Vec<NumericFact>> {
    let rows = read_rows(member, reader, FACT_COLUMNS)?;
    let mut facts = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let (record, worksheet, line, column) = parse_fact_key(member, idx + 1, row)?;
        let value = parse_f64(member, idx + 1, &row[4], "numeric value")?;
        facts.push(NumericFact::new(record, worksheet, line, column, value));
    }
    Ok(facts)
}

pub fn read_report_index<R: Read>(member: &str, reader: R) -> Result<Vec<ReportRecord>> {
    let rows = read_rows(member, reader, REPORT_COLUMNS)?;
    let mut reports = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let row_num = idx + 1;
        reports.push(ReportRecord {
            record_id: RecordId::new(parse_u64(member, row_num, &row[0], "record id")?),
            prvdr_ctrl_type_cd: row[1].clone(),
            prvdr_num: parse_u64(member, row_num, &row[2], "provider number")?,
            npi: row[3].clone(),
            rpt_stus_cd: row[4].clone(),
            fy_bgn_dt: row[5].clone(),
            fy_end_dt: row[6].clone(),
            proc_dt: row[7].clone(),
            initl_rpt_sw: row[8].clone(),
            last_rpt_sw: row[9].clone(),
            trnsmtl_num: row[10].clone(),
            fi_num: row[11].clone(),
            adr_vndr_cd: row[12].clone(),
            fi_creat_dt: row[13].clone(),
            util_cd: row[14].clone(),
            npr_dt: row[15].clone(),
            spec_ind: row[16].clone(),
            fi_rcpt_dt: row[17].clone(),
        });
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_numeric_facts_positionally() {
        let data = "100,S300001,00200,00700,10\n100,S300001,01400,00800,20\n";
        let facts = read_numeric_facts("TEST_NMRC.CSV", data.as_bytes()).expect("decode");
        assert_eq!(facts.len(), 2);
        assert_eq!(facts[0].record, RecordId::new(100));
        assert_eq!(facts[0].worksheet.as_str(), "S300001");
        assert_eq!(facts[0].line, LineNum::new(200));
        assert_eq!(facts[0].column.as_str(), "00700");
        assert_eq!(facts[0].value, 10.0);
    }

    #[test]
    fn column_codes_keep_leading_zeroes() {
        let data = "1,S200001,02600,00100,urban\n";
        let facts = read_alpha_facts("TEST_ALPHA.CSV", data.as_bytes()).expect("decode");
        assert_eq!(facts[0].column.as_str(), "00100");
        assert_eq!(facts[0].value, "urban");
    }

    #[test]
    fn wrong_column_count_is_an_error() {
        let data = "1,S200001,02600,00100\n";
        let err = read_alpha_facts("TEST_ALPHA.CSV", data.as_bytes()).unwrap_err();
        match err {
            IngestError::ColumnCount { row, expected, found, .. } => {
                assert_eq!(row, 1);
                assert_eq!(expected, FACT_COLUMNS);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unparseable_numeric_value_is_an_error() {
        let data = "1,S300001,00200,00700,ten\n";
        let err = read_numeric_facts("TEST_NMRC.CSV", data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::Parse { what: "numeric value", .. }));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let data = "1,S300001,00200,00700,10\n,,,,\n";
        let facts = read_numeric_facts("TEST_NMRC.CSV", data.as_bytes()).expect("decode");
        assert_eq!(facts.len(), 1);
    }
}
