//! Processing summary and result structures for the logbook pipeline

use crate::app::models::{AggregatedEntry, RunningTotals};
use crate::app::services::aircraft_registry::AircraftRegistry;
use crate::app::services::statistics::{AircraftUsage, WindowedStatistics};
use serde::{Deserialize, Serialize};

/// Counts describing one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessingSummary {
    /// Entries produced by the import
    pub entries: usize,
    /// Entries with at least one rule violation
    pub entries_with_errors: usize,
    /// Entries with at least one advisory warning
    pub entries_with_warnings: usize,
    /// Flights whose aircraft was missing from the aircraft table
    pub unknown_aircraft_defaulted: usize,
}

impl ProcessingSummary {
    /// Count flagged entries
    pub fn from_entries(entries: &[AggregatedEntry], unknown_aircraft_defaulted: usize) -> Self {
        Self {
            entries: entries.len(),
            entries_with_errors: entries.iter().filter(|e| e.has_errors()).count(),
            entries_with_warnings: entries.iter().filter(|e| e.has_warnings()).count(),
            unknown_aircraft_defaulted,
        }
    }

    /// Entries passing every rule
    pub fn clean_entries(&self) -> usize {
        self.entries - self.entries_with_errors
    }

    /// Share of entries without errors, as a percentage
    pub fn clean_rate(&self) -> f64 {
        if self.entries == 0 {
            100.0
        } else {
            (self.clean_entries() as f64 / self.entries as f64) * 100.0
        }
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} entries ({:.1}% clean) | With errors: {} | With warnings: {} | Unlisted aircraft: {}",
            self.entries,
            self.clean_rate(),
            self.entries_with_errors,
            self.entries_with_warnings,
            self.unknown_aircraft_defaulted
        )
    }
}

/// Result of running an export through the whole pipeline
#[derive(Debug, Clone)]
pub struct ProcessedLogbook {
    /// Entries in date order, each with diagnostics and running totals
    pub entries: Vec<AggregatedEntry>,
    /// Aircraft table used to resolve the entries
    pub aircraft: AircraftRegistry,
    pub statistics: WindowedStatistics,
    /// Most flown aircraft first
    pub aircraft_usage: Vec<AircraftUsage>,
    pub summary: ProcessingSummary,
}

impl ProcessedLogbook {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entries with rule violations
    pub fn flagged_entries(&self) -> impl Iterator<Item = &AggregatedEntry> {
        self.entries.iter().filter(|entry| entry.has_errors())
    }

    /// Running totals after the last entry
    pub fn final_totals(&self) -> Option<&RunningTotals> {
        self.entries.last().map(AggregatedEntry::running_totals)
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.summary.summary()
    }
}
