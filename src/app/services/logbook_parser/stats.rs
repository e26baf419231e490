//! Import statistics and result structures

use crate::app::models::LogbookEntry;
use crate::app::services::aircraft_registry::AircraftRegistry;
use serde::{Deserialize, Serialize};

/// Entries produced by one import together with the registry used to build them
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Entries in file order (not sorted by date)
    pub entries: Vec<LogbookEntry>,

    /// Aircraft registry built from the aircraft table
    pub aircraft: AircraftRegistry,

    /// Import statistics
    pub stats: ImportStats,
}

/// Simple import statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportStats {
    /// Aircraft table data rows read
    pub aircraft_rows: usize,

    /// Distinct aircraft registered
    pub aircraft_loaded: usize,

    /// Flight rows read
    pub flight_rows: usize,

    /// Entries produced
    pub entries_imported: usize,

    /// Flights that referenced an aircraft missing from the aircraft table
    pub unknown_aircraft_defaulted: usize,

    /// Distinct aircraft ids that were defaulted, in first-seen order
    pub unknown_aircraft_ids: Vec<String>,
}

impl ImportStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            aircraft_rows: 0,
            aircraft_loaded: 0,
            flight_rows: 0,
            entries_imported: 0,
            unknown_aircraft_defaulted: 0,
            unknown_aircraft_ids: Vec::new(),
        }
    }

    pub(crate) fn record_defaulted_aircraft(&mut self, aircraft_id: &str) {
        self.unknown_aircraft_defaulted += 1;
        if !self.unknown_aircraft_ids.iter().any(|id| id == aircraft_id) {
            self.unknown_aircraft_ids.push(aircraft_id.to_string());
        }
    }

    /// Get a summary string of the import
    pub fn summary(&self) -> String {
        format!(
            "Imported {} entries from {} flight rows using {} aircraft ({} flights with unlisted aircraft)",
            self.entries_imported,
            self.flight_rows,
            self.aircraft_loaded,
            self.unknown_aircraft_defaulted
        )
    }
}

impl Default for ImportStats {
    fn default() -> Self {
        Self::new()
    }
}
