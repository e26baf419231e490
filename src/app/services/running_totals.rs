//! Running totals accumulation
//!
//! Orders validated entries chronologically and attaches to each one a
//! snapshot of the cumulative flight-time counters up to and including it.

use crate::app::models::{AggregatedEntry, RunningTotals, ValidatedEntry};
use tracing::{debug, info};

/// Sort entries by date and attach a running-totals snapshot to each
///
/// The sort is stable, so entries sharing a date keep their import order.
/// Sums are carried unrounded; each snapshot is an independent copy rounded
/// to one decimal place.
///
/// # Arguments
///
/// * `entries` - Validated entries in any order
///
/// # Returns
///
/// The same entries, ascending by date, each with its snapshot
pub fn accumulate(mut entries: Vec<ValidatedEntry>) -> Vec<AggregatedEntry> {
    entries.sort_by_key(|validated| validated.entry().date);

    let mut running = RunningTotals::default();
    let aggregated: Vec<AggregatedEntry> = entries
        .into_iter()
        .map(|validated| {
            running.add(validated.entry());
            AggregatedEntry::new(validated, running.rounded())
        })
        .collect();

    if let (Some(first), Some(last)) = (aggregated.first(), aggregated.last()) {
        debug!(
            "Accumulated {} to {}",
            first.entry().date,
            last.entry().date
        );
    }
    info!(
        "Running totals attached to {} entries ({:.1} hours total)",
        aggregated.len(),
        running.rounded().total_time
    );

    aggregated
}
