//! Metric builders: one module per business metric or metric family.
//!
//! Each builder is a pure function of the raw fact tables. It extracts the
//! worksheet it needs, selects the coordinates the reporting specification
//! names, and combines the results by outer join and arithmetic.

mod geography;
mod medicaid;
mod s_worksheet;
mod ssi;
mod states;

pub(crate) use medicaid::output_columns as medicaid_columns;
pub(crate) use s_worksheet::output_columns as s_worksheet_columns;

pub use geography::{GEO_COLUMN, geography};
pub use medicaid::{
    MEDICAID_DAY_LINES, TOTAL_DAYS_COLUMN, UTILIZATION_COLUMN, medicaid_utilization,
};
pub use s_worksheet::{S_WORKSHEET_FIELDS, s_worksheet_fields};
pub use ssi::{SSI_COLUMN, ssi_percentage};
pub use states::{UNKNOWN_STATE, provider_state, provider_states, state_for_prefix};
