//! Archive opening and member-name derivation.
//!
//! An archive carries exactly three delimited members whose names derive
//! from the archive's own file name: the fiscal-year marker `FY` is
//! replaced with `_`, then the `_RPT` / `_ALPHA` / `_NMRC` suffixes are
//! appended (`HOSPFY1995.ZIP` -> `HOSP_1995_RPT.CSV`, ...).

use std::ffi::OsStr;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, info};
use zip::ZipArchive;

use hcris_model::ArchiveTables;

use crate::error::{IngestError, Result};
use crate::tables::{read_alpha_facts, read_numeric_facts, read_report_index};

const RPT_SUFFIX: &str = "_RPT.CSV";
const ALPHA_SUFFIX: &str = "_ALPHA.CSV";
const NMRC_SUFFIX: &str = "_NMRC.CSV";

/// Derives the member base name from an archive (or directory) path.
pub fn member_base_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or_default();
    stem.replace("FY", "_")
}

fn resolve_member(names: &[String], wanted: &str) -> Result<String> {
    if let Some(name) = names.iter().find(|name| name.as_str() == wanted) {
        return Ok(name.clone());
    }
    names
        .iter()
        .find(|name| name.eq_ignore_ascii_case(wanted))
        .cloned()
        .ok_or_else(|| IngestError::MissingMember {
            member: wanted.to_string(),
        })
}

/// Opens a cost-report ZIP archive and decodes its three members.
pub fn open_archive(path: &Path) -> Result<ArchiveTables> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file).map_err(|source| IngestError::ArchiveOpen {
        path: path.to_path_buf(),
        source,
    })?;

    let base = member_base_name(path);
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();
    let rpt_member = resolve_member(&names, &format!("{base}{RPT_SUFFIX}"))?;
    let alpha_member = resolve_member(&names, &format!("{base}{ALPHA_SUFFIX}"))?;
    let nmrc_member = resolve_member(&names, &format!("{base}{NMRC_SUFFIX}"))?;

    let reports = {
        let member = open_member(&mut archive, &rpt_member)?;
        read_report_index(&rpt_member, member)?
    };
    let alpha = {
        let member = open_member(&mut archive, &alpha_member)?;
        read_alpha_facts(&alpha_member, member)?
    };
    let numeric = {
        let member = open_member(&mut archive, &nmrc_member)?;
        read_numeric_facts(&nmrc_member, member)?
    };

    debug!(
        member = %rpt_member,
        rows = reports.len(),
        "decoded report index"
    );
    debug!(member = %alpha_member, rows = alpha.len(), "decoded alpha facts");
    debug!(member = %nmrc_member, rows = numeric.len(), "decoded numeric facts");
    info!(
        archive = %path.display(),
        reports = reports.len(),
        alpha = alpha.len(),
        numeric = numeric.len(),
        "opened cost report archive"
    );

    Ok(ArchiveTables {
        reports,
        alpha,
        numeric,
    })
}

fn open_member<'a>(
    archive: &'a mut ZipArchive<File>,
    member: &str,
) -> Result<impl Read + use<'a>> {
    archive
        .by_name(member)
        .map_err(|_| IngestError::MissingMember {
            member: member.to_string(),
        })
}

/// Decodes the three members straight from a directory, without the ZIP
/// wrapper. The directory name plays the archive-name role for member
/// naming (`HOSPFY1995/` -> `HOSP_1995_RPT.CSV`, ...).
pub fn load_tables_from_dir(dir: &Path) -> Result<ArchiveTables> {
    let base = member_base_name(dir);

    let rpt_member = format!("{base}{RPT_SUFFIX}");
    let alpha_member = format!("{base}{ALPHA_SUFFIX}");
    let nmrc_member = format!("{base}{NMRC_SUFFIX}");

    let reports = read_report_index(&rpt_member, open_dir_member(dir, &rpt_member)?)?;
    let alpha = read_alpha_facts(&alpha_member, open_dir_member(dir, &alpha_member)?)?;
    let numeric = read_numeric_facts(&nmrc_member, open_dir_member(dir, &nmrc_member)?)?;

    info!(
        dir = %dir.display(),
        reports = reports.len(),
        alpha = alpha.len(),
        numeric = numeric.len(),
        "loaded cost report tables from directory"
    );

    Ok(ArchiveTables {
        reports,
        alpha,
        numeric,
    })
}

fn open_dir_member(dir: &Path, member: &str) -> Result<File> {
    let path = dir.join(member);
    File::open(&path).map_err(|error| {
        if error.kind() == std::io::ErrorKind::NotFound {
            IngestError::MissingMember {
                member: member.to_string(),
            }
        } else {
            IngestError::Io(error)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_name_replaces_fiscal_year_marker() {
        assert_eq!(
            member_base_name(Path::new("data/HOSPFY1995.ZIP")),
            "HOSP_1995"
        );
        assert_eq!(member_base_name(Path::new("SNFFY2004.zip")), "SNF_2004");
        assert_eq!(member_base_name(Path::new("HOSP_1995")), "HOSP_1995");
    }

    #[test]
    fn member_resolution_is_case_insensitive() {
        let names = vec!["hosp_1995_rpt.csv".to_string()];
        assert_eq!(
            resolve_member(&names, "HOSP_1995_RPT.CSV").unwrap(),
            "hosp_1995_rpt.csv"
        );
        assert!(matches!(
            resolve_member(&names, "HOSP_1995_NMRC.CSV"),
            Err(IngestError::MissingMember { .. })
        ));
    }
}
