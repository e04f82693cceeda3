//! Configuration options for summarization runs.

use serde::{Deserialize, Serialize};

/// Presentation policy for cells that are still missing after all joins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillPolicy {
    /// Replace every missing cell with zero, the historical output shape.
    /// Conflates "not applicable" with "computed as zero".
    #[default]
    Zero,
    /// Leave missing cells empty in the output.
    PreserveMissing,
}

/// What to do when a metric's column code is absent from its worksheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingMetricPolicy {
    /// Abort the run. A missing column usually means the wrong archive.
    #[default]
    Fail,
    /// Keep the run alive and emit the metric as all-missing.
    TreatAsMissing,
}

/// Options controlling summarization behavior.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SummarizeOptions {
    pub fill: FillPolicy,
    pub missing_metric: MissingMetricPolicy,
}

impl SummarizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: FillPolicy) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_missing_metric(mut self, policy: MissingMetricPolicy) -> Self {
        self.missing_metric = policy;
        self
    }
}
