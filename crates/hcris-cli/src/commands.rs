//! Command implementations.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use comfy_table::Table;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use tracing::info;

use hcris_core::metrics::{MEDICAID_DAY_LINES, S_WORKSHEET_FIELDS};
use hcris_core::{ProgressSink, summarize};
use hcris_ingest::{load_tables_from_dir, open_archive};
use hcris_model::{FillPolicy, MissingMetricPolicy, SummarizeOptions, SummaryTable};
use hcris_output::write_summary_file;

use crate::cli::SummarizeArgs;
use crate::types::RunResult;

/// Events sent back from the worker thread to the front-end loop.
enum PipelineEvent {
    Stage(String),
    Finished(Result<SummaryTable>),
}

/// Progress sink that forwards stage names over the worker channel.
struct ChannelProgress {
    sender: mpsc::Sender<PipelineEvent>,
}

impl ProgressSink for ChannelProgress {
    fn stage(&self, name: &str) {
        let _ = self.sender.send(PipelineEvent::Stage(name.to_string()));
    }
}

/// Runs load + summarize on a worker thread so the front-end loop only
/// renders progress, then writes the output file.
pub fn run_summarize(args: &SummarizeArgs) -> Result<RunResult> {
    let archive = args.archive.clone();
    let from_dir = args.from_dir;
    let options = summarize_options(args);

    let started = Instant::now();
    let (sender, receiver) = mpsc::channel();

    let worker_sender = sender.clone();
    let handle = thread::spawn(move || {
        let result = run_pipeline(&archive, from_dir, &options, &worker_sender);
        let _ = worker_sender.send(PipelineEvent::Finished(result));
    });
    drop(sender);

    let mut outcome = None;
    for event in receiver {
        match event {
            PipelineEvent::Stage(name) => info!("{name}"),
            PipelineEvent::Finished(result) => outcome = Some(result),
        }
    }
    handle
        .join()
        .map_err(|_| anyhow!("summarize worker panicked"))?;
    let table = outcome.ok_or_else(|| anyhow!("summarize worker exited without a result"))??;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.archive));
    write_summary_file(&output, &table)
        .with_context(|| format!("write summarized table: {}", output.display()))?;
    info!(rows = table.row_count(), output = %output.display(), "run complete");

    Ok(RunResult {
        archive: args.archive.clone(),
        output,
        rows: table.row_count(),
        elapsed: started.elapsed(),
    })
}

fn summarize_options(args: &SummarizeArgs) -> SummarizeOptions {
    let fill = if args.preserve_missing {
        FillPolicy::PreserveMissing
    } else {
        FillPolicy::Zero
    };
    let missing_metric = if args.lenient_metrics {
        MissingMetricPolicy::TreatAsMissing
    } else {
        MissingMetricPolicy::Fail
    };
    SummarizeOptions::new()
        .with_fill(fill)
        .with_missing_metric(missing_metric)
}

fn run_pipeline(
    archive: &Path,
    from_dir: bool,
    options: &SummarizeOptions,
    sender: &mpsc::Sender<PipelineEvent>,
) -> Result<SummaryTable> {
    let progress = ChannelProgress {
        sender: sender.clone(),
    };
    progress.stage("Opening files...");
    let tables = if from_dir {
        load_tables_from_dir(archive)?
    } else {
        open_archive(archive)?
    };
    Ok(summarize(&tables, options, &progress)?)
}

fn default_output_path(archive: &Path) -> PathBuf {
    let stem = archive
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("summary");
    archive.with_file_name(format!("{stem}_summary.csv"))
}

/// Prints the worksheet coordinates each metric reads.
pub fn run_worksheets() {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Worksheet", "Coordinates", "Output column"]);
    let day_lines = MEDICAID_DAY_LINES.map(|line| line.to_string()).join("/");
    table.add_row(vec![
        "S300001".to_string(),
        format!("lines {day_lines} col 00700; line 1400 col 00800"),
        "MED_UTIL (with HMO, TOT_HOSP, LAB_DEL_DAYS, TOT_HOSP_DAYS)".to_string(),
    ]);
    table.add_row(vec![
        "E00A18A".to_string(),
        "line 3000 col 00100".to_string(),
        "SSI_PER".to_string(),
    ]);
    table.add_row(vec![
        "S200001".to_string(),
        "line 2600 col 00100".to_string(),
        "URBAN_RURAL".to_string(),
    ]);
    for (name, line, column) in S_WORKSHEET_FIELDS {
        table.add_row(vec![
            "S100000".to_string(),
            format!("line {line} col {column}"),
            name.to_string(),
        ]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_the_archive() {
        let path = default_output_path(Path::new("data/HOSPFY1995.ZIP"));
        assert_eq!(path, Path::new("data/HOSPFY1995_summary.csv"));
    }
}
