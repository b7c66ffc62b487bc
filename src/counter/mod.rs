mod batch;
mod engine;
mod tally;

pub use batch::{BatchSummary, FileFailure, FileReport, count_file, count_files};
pub use engine::{CountMode, LineCounter};
pub use tally::{CodeBreakdown, FileTally, LineStats};
