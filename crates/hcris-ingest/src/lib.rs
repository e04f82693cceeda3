pub mod archive;
pub mod error;
pub mod tables;

pub use archive::{load_tables_from_dir, member_base_name, open_archive};
pub use error::IngestError;
pub use tables::{
    FACT_COLUMNS, REPORT_COLUMNS, read_alpha_facts, read_numeric_facts, read_report_index,
};
