//! End-to-end pipeline test over a synthesized archive.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;

use hcris_cli::cli::SummarizeArgs;
use hcris_cli::commands::run_summarize;

const RPT_ROWS: &str = "\
100,2,50001,,1,10/01/1994,09/30/1995,12/31/1995,N,Y,1,123,4,01/01/1996,1,,N,01/15/1996
200,2,990001,,1,07/01/1994,06/30/1995,12/31/1995,N,Y,1,123,4,01/01/1996,1,,N,01/15/1996
";
const ALPHA_ROWS: &str = "100,S200001,02600,00100,1\n";
const NMRC_ROWS: &str = "\
100,S300001,00200,00700,10
100,S300001,01400,00700,5
100,S300001,03200,00700,0
100,S300001,01400,00800,20
100,E00A18A,03000,00100,0.05
100,S100000,00100,00100,0.5
100,S100000,00600,00100,1000
100,S100000,00700,00100,500
100,S100000,02000,00300,250
100,S100000,02300,00300,125
100,S100000,03100,00100,75
";

fn write_archive(dir: &Path) -> PathBuf {
    let path = dir.join("HOSPFY1995.ZIP");
    let file = File::create(&path).expect("create archive");
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, contents) in [
        ("HOSP_1995_RPT.CSV", RPT_ROWS),
        ("HOSP_1995_ALPHA.CSV", ALPHA_ROWS),
        ("HOSP_1995_NMRC.CSV", NMRC_ROWS),
    ] {
        writer.start_file(name, options).expect("start member");
        writer.write_all(contents.as_bytes()).expect("write member");
    }
    writer.finish().expect("finish archive");
    path
}

#[test]
fn summarize_command_writes_the_output_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let archive = write_archive(dir.path());
    let output = dir.path().join("summary.csv");

    let args = SummarizeArgs {
        archive: archive.clone(),
        output: Some(output.clone()),
        from_dir: false,
        preserve_missing: false,
        lenient_metrics: false,
    };

    let result = run_summarize(&args).expect("run summarize");
    assert_eq!(result.rows, 2);
    assert_eq!(result.output, output);

    let contents = std::fs::read_to_string(&output).expect("read output");
    let mut lines = contents.lines();
    let header = lines.next().expect("header line");
    assert!(header.starts_with("RPT_REC_NUM,PRVDR_NUM,FY_END_DT,"));

    let first = lines.next().expect("first row");
    assert!(first.starts_with("100,50001,09/30/1995,"));
    assert!(first.contains("California"));
    assert!(first.ends_with("0.8"));

    let second = lines.next().expect("second row");
    assert!(second.starts_with("200,990001,06/30/1995,"));
    assert!(second.contains("Unknown"));
    assert!(lines.next().is_none());
}

#[test]
fn default_output_lands_next_to_the_archive() {
    let dir = tempfile::tempdir().expect("temp dir");
    let archive = write_archive(dir.path());

    let args = SummarizeArgs {
        archive,
        output: None,
        from_dir: false,
        preserve_missing: false,
        lenient_metrics: false,
    };

    let result = run_summarize(&args).expect("run summarize");
    assert_eq!(result.output, dir.path().join("HOSPFY1995_summary.csv"));
    assert!(result.output.is_file());
}
