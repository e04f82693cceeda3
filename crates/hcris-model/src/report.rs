#![deny(unsafe_code)]

use chrono::NaiveDate;

use crate::RecordId;

/// Date format used by HCRIS exports (`09/30/1995`).
pub const REPORT_DATE_FORMAT: &str = "%m/%d/%Y";

/// One row of the `_RPT` member: a filed cost report instance.
///
/// Field names follow the positional column codes of the export. Dates are
/// kept verbatim as text so output preserves the source byte-for-byte;
/// the accessors parse on demand.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReportRecord {
    pub record_id: RecordId,
    pub prvdr_ctrl_type_cd: String,
    pub prvdr_num: u64,
    pub npi: String,
    pub rpt_stus_cd: String,
    pub fy_bgn_dt: String,
    pub fy_end_dt: String,
    pub proc_dt: String,
    pub initl_rpt_sw: String,
    pub last_rpt_sw: String,
    pub trnsmtl_num: String,
    pub fi_num: String,
    pub adr_vndr_cd: String,
    pub fi_creat_dt: String,
    pub util_cd: String,
    pub npr_dt: String,
    pub spec_ind: String,
    pub fi_rcpt_dt: String,
}

impl ReportRecord {
    pub fn fy_begin_date(&self) -> Option<NaiveDate> {
        parse_report_date(&self.fy_bgn_dt)
    }

    pub fn fy_end_date(&self) -> Option<NaiveDate> {
        parse_report_date(&self.fy_end_dt)
    }
}

fn parse_report_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, REPORT_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fiscal_year_dates() {
        let record = ReportRecord {
            record_id: RecordId::new(1),
            fy_bgn_dt: "10/01/1994".to_string(),
            fy_end_dt: "09/30/1995".to_string(),
            ..ReportRecord::default()
        };
        let end = record.fy_end_date().expect("fy end parses");
        assert_eq!(end, NaiveDate::from_ymd_opt(1995, 9, 30).unwrap());
        assert!(record.fy_begin_date().is_some());
    }

    #[test]
    fn blank_or_malformed_dates_are_none() {
        let record = ReportRecord {
            fy_end_dt: "1995-09-30".to_string(),
            ..ReportRecord::default()
        };
        assert!(record.fy_end_date().is_none());
        assert!(record.fy_begin_date().is_none());
    }
}
