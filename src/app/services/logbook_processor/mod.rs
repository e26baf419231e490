//! Logbook processing pipeline
//!
//! Runs an export through every stage and gathers the results:
//!
//! 1. **Import**: split the export, load the aircraft table, build entries
//! 2. **Validation**: attach rule diagnostics to each entry
//! 3. **Running totals**: sort by date and snapshot cumulative times
//! 4. **Statistics**: windowed totals and per-aircraft usage
//!
//! Import failures abort the run. Rule violations never do; they travel on
//! the entries and are counted in the [`ProcessingSummary`].
//!
//! - [`processor`] - `LogbookProcessor` and pipeline orchestration
//! - [`stats`] - `ProcessedLogbook` and `ProcessingSummary`

pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

pub use processor::LogbookProcessor;
pub use stats::{ProcessedLogbook, ProcessingSummary};
