//! Test utilities for aircraft registry testing

use crate::app::models::{Aircraft, CategoryClass, GearType};
use crate::app::services::logbook_parser::RawRow;
use crate::config::ImportConfig;

// Test modules
mod loader_tests;
mod registry_tests;

/// Helper to create a tailwheel test aircraft
pub fn create_test_aircraft(registration: &str, type_code: &str) -> Aircraft {
    Aircraft::new(registration, type_code, CategoryClass::AirplaneSingleEngineLand)
        .with_gear(GearType::Tailwheel)
        .with_icao_type_code(type_code)
}

/// Helper to create an aircraft table row
pub fn create_test_aircraft_row(registration: &str, type_code: &str, gear: &str) -> RawRow {
    RawRow::new()
        .with("AircraftID", registration)
        .with("TypeCode", type_code)
        .with("Make", "American Champion")
        .with("Model", "7ECA")
        .with("GearType", gear)
        .with("aircraftClass (FAA)", "airplane_single_engine_land")
        .with("complexAircraft (FAA)", "")
        .with("highPerformance (FAA)", "")
}

pub fn create_test_config() -> ImportConfig {
    ImportConfig::default()
}
