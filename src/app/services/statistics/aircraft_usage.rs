//! Per-aircraft usage summary

use std::collections::HashMap;

use crate::app::models::{LogbookEntry, pipeline::round_tenth};
use serde::{Deserialize, Serialize};

/// Flights and hours logged in one aircraft
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftUsage {
    pub registration: String,
    pub aircraft_type: String,
    pub flights: usize,
    pub total_time: f64,
}

/// Usage per registration, most flown first
///
/// Entries without a registration (ground sessions) are skipped. Ties on
/// flight count are ordered by registration.
pub fn aircraft_usage<E: AsRef<LogbookEntry>>(entries: &[E]) -> Vec<AircraftUsage> {
    let mut by_registration: HashMap<&str, AircraftUsage> = HashMap::new();

    for entry in entries.iter().map(AsRef::as_ref) {
        let registration = entry.aircraft.registration.trim();
        if registration.is_empty() {
            continue;
        }

        let usage = by_registration
            .entry(registration)
            .or_insert_with(|| AircraftUsage {
                registration: registration.to_string(),
                aircraft_type: entry.aircraft.type_code.clone(),
                flights: 0,
                total_time: 0.0,
            });
        usage.flights += 1;
        usage.total_time += entry.total_time;
    }

    let mut usage: Vec<AircraftUsage> = by_registration
        .into_values()
        .map(|mut usage| {
            usage.total_time = round_tenth(usage.total_time);
            usage
        })
        .collect();
    usage.sort_by(|a, b| {
        b.flights
            .cmp(&a.flights)
            .then_with(|| a.registration.cmp(&b.registration))
    });
    usage
}
