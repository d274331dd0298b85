//! Command implementations

pub mod simple;
pub mod status;

pub use simple::run_simple;
pub use status::{ProgressReport, WordOutcome, WordProgress, collect_progress, read_progress};
