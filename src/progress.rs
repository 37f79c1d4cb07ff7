// src/progress.rs
/// Lightweight progress reporting for long-running fetch jobs.
/// Frontends (CLI, scheduled runner) implement this to surface status.
pub trait Progress {
    /// Called at the start with the total number of units (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a month, an obra-year).
    fn unit_done(&mut self, _label: &str, _records: usize) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Prints progress lines to stderr; used by both binaries.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn unit_done(&mut self, label: &str, records: usize) {
        eprintln!("{label}: {records} records");
    }
}
