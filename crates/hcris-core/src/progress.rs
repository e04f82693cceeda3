//! Progress reporting seam between the pipeline and a front-end.

/// Receives human-readable stage names as the pipeline advances. The
/// front-end decides how to surface them; the pipeline never blocks on
/// the sink.
pub trait ProgressSink {
    fn stage(&self, name: &str);
}

/// Sink that ignores every stage, for library callers and tests.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn stage(&self, _name: &str) {}
}
