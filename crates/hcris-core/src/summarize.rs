//! Summarization orchestrator: one denormalized output row per report.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use hcris_model::{
    ArchiveTables, CellValue, FillPolicy, MetricTable, MissingMetricPolicy, RecordId,
    ReportRecord, SUMMARY_COLUMNS, SummarizeOptions, SummaryRow, SummaryTable,
};

use crate::error::{CoreError, Result};
use crate::metrics::{
    GEO_COLUMN, SSI_COLUMN, UTILIZATION_COLUMN, geography, medicaid_columns,
    medicaid_utilization, provider_states, s_worksheet_columns, s_worksheet_fields,
    ssi_percentage,
};
use crate::progress::ProgressSink;

/// Builds the summarized table from the three raw archive tables.
///
/// The report index is projected to (record, provider, fiscal-year-end);
/// every metric builder runs and its table outer-joins on record id, so a
/// record present in any metric survives even without an index row. The
/// provider-state mapping left-joins on provider id (rows without a match
/// keep no state). Exact duplicate rows are removed, the internal metric
/// columns map positionally onto the canonical schema, missing cells are
/// filled per [`FillPolicy`], and `DSH_PAT_PER` is derived as
/// `MED_UTIL + SSI_PER` with missing inputs contributing zero.
///
/// Rows come out sorted by record id, so identical inputs produce
/// byte-identical output.
pub fn summarize(
    tables: &ArchiveTables,
    options: &SummarizeOptions,
    progress: &dyn ProgressSink,
) -> Result<SummaryTable> {
    progress.stage("Getting Medicaid utilization...");
    let medicaid = optional_metric(options, medicaid_columns(), || {
        medicaid_utilization(&tables.alpha, &tables.numeric)
    })?;

    progress.stage("Getting SSI percentage...");
    let ssi = optional_metric(options, vec![SSI_COLUMN.to_string()], || {
        ssi_percentage(&tables.alpha, &tables.numeric)
    })?;

    progress.stage("Getting S100000 worksheet fields...");
    let s_fields = optional_metric(options, s_worksheet_columns(), || {
        s_worksheet_fields(&tables.alpha, &tables.numeric)
    })?;

    progress.stage("Getting geography...");
    let geo = optional_metric(options, vec![GEO_COLUMN.to_string()], || {
        geography(&tables.alpha, &tables.numeric)
    })?;

    progress.stage("Getting states info...");
    let states = provider_states(&tables.reports);

    progress.stage("Joining fields...");
    let metrics = medicaid
        .outer_join(ssi)?
        .outer_join(s_fields)?
        .outer_join(geo)?;
    debug_assert_eq!(metrics.columns().len() + 4, SUMMARY_COLUMNS.len());

    let reports_by_record: BTreeMap<RecordId, &ReportRecord> = tables
        .reports
        .iter()
        .map(|report| (report.record_id, report))
        .collect();

    let mut record_ids: BTreeSet<RecordId> = reports_by_record.keys().copied().collect();
    record_ids.extend(metrics.record_ids());
    debug!(
        records = record_ids.len(),
        metric_columns = metrics.columns().len(),
        "joined metric tables"
    );

    let mut rows = Vec::with_capacity(record_ids.len());
    for record in record_ids {
        let report = reports_by_record.get(&record).copied();

        let mut values = Vec::with_capacity(SUMMARY_COLUMNS.len());
        values.push(
            report
                .map(|r| CellValue::Number(r.prvdr_num as f64))
                .unwrap_or(CellValue::Missing),
        );
        values.push(
            report
                .map(|r| CellValue::Text(r.fy_end_dt.clone()))
                .unwrap_or(CellValue::Missing),
        );
        for column in metrics.columns() {
            values.push(
                metrics
                    .get(record, column)
                    .cloned()
                    .unwrap_or(CellValue::Missing),
            );
        }
        let state = report.and_then(|r| states.get(&r.prvdr_num).copied());
        values.push(
            state
                .map(|name| CellValue::Text(name.to_string()))
                .unwrap_or(CellValue::Missing),
        );

        let med_util = metrics
            .get(record, UTILIZATION_COLUMN)
            .map(|cell| cell.number_or(0.0))
            .unwrap_or(0.0);
        let ssi_per = metrics
            .get(record, SSI_COLUMN)
            .map(|cell| cell.number_or(0.0))
            .unwrap_or(0.0);
        values.push(CellValue::Number(med_util + ssi_per));

        rows.push(SummaryRow {
            record_id: record,
            values,
        });
    }

    let before = rows.len();
    let mut rows = drop_exact_duplicates(rows);
    if rows.len() < before {
        debug!(removed = before - rows.len(), "removed duplicate summary rows");
    }

    if options.fill == FillPolicy::Zero {
        for row in &mut rows {
            for value in &mut row.values {
                if value.is_missing() {
                    *value = CellValue::Number(0.0);
                }
            }
        }
    }

    info!(rows = rows.len(), "summarized cost report archive");
    Ok(SummaryTable { rows })
}

fn optional_metric(
    options: &SummarizeOptions,
    columns: Vec<String>,
    build: impl FnOnce() -> Result<MetricTable>,
) -> Result<MetricTable> {
    match build() {
        Ok(table) => Ok(table),
        Err(CoreError::KeyNotFound { worksheet, column })
            if options.missing_metric == MissingMetricPolicy::TreatAsMissing =>
        {
            warn!(
                worksheet = %worksheet,
                column = %column,
                "column missing; metric treated as all-missing"
            );
            Ok(MetricTable::with_columns(columns))
        }
        Err(error) => Err(error),
    }
}

fn drop_exact_duplicates(rows: Vec<SummaryRow>) -> Vec<SummaryRow> {
    let mut seen = BTreeSet::new();
    let mut kept = Vec::with_capacity(rows.len());
    for row in rows {
        let mut composite = row.record_id.to_string();
        for value in &row.values {
            composite.push('|');
            composite.push_str(&value.render());
        }
        if seen.insert(composite) {
            kept.push(row);
        }
    }
    kept
}
