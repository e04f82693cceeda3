pub mod error;
pub mod metrics;
pub mod progress;
pub mod select;
pub mod summarize;
pub mod worksheet;

pub use error::CoreError;
pub use progress::{NullProgress, ProgressSink};
pub use select::{line_column_name, select_line, select_lines, unstack_lines};
pub use summarize::summarize;
pub use worksheet::extract_worksheet;
