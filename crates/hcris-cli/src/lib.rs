//! CLI library components for the HCRIS cost report summarizer.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
