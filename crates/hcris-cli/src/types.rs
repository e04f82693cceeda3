use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub struct RunResult {
    pub archive: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub elapsed: Duration,
}
