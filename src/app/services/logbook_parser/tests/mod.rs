//! Test utilities for logbook importer testing
//!
//! Provides a realistic two-table export and row builders shared by the
//! importer test modules.

use chrono::NaiveDate;

use crate::app::models::{Aircraft, CategoryClass, GearType};
use crate::app::services::aircraft_registry::AircraftRegistry;
use crate::app::services::logbook_parser::{LogbookImporter, RawRow};
use crate::config::ImportConfig;


/// Fixed "today" so date checks are deterministic
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Helper to create an importer with default settings and a fixed today
pub fn create_test_importer() -> LogbookImporter {
    LogbookImporter::new(ImportConfig::default()).with_today(test_today())
}

/// Helper to create a registry holding the two test aircraft
pub fn create_test_registry() -> AircraftRegistry {
    AircraftRegistry::from_aircraft(
        vec![
            Aircraft::new("N125CM", "CH7A", CategoryClass::AirplaneSingleEngineLand)
                .with_gear(GearType::Tailwheel)
                .with_icao_type_code("CH7A"),
            Aircraft::new("N198JJ", "CH8A", CategoryClass::AirplaneSingleEngineLand)
                .with_gear(GearType::Tailwheel)
                .with_icao_type_code("CH8A"),
        ],
        &ImportConfig::default(),
    )
}

/// Helper to create a flight row with the fields every test needs
pub fn create_test_flight_row(date: &str, aircraft_id: &str, total_time: f64) -> RawRow {
    RawRow::new()
        .with("Date", date)
        .with("AircraftID", aircraft_id)
        .with("From", "KOAK")
        .with("To", "KSFO")
        .with("TotalTime", total_time)
}

/// Helper to create a complete test export, in the layout ForeFlight writes
pub fn create_test_export() -> String {
    [
        "ForeFlight Logbook Import,This row is required for importing into ForeFlight. Do not delete or modify.,,,,,,,,",
        ",,,,,,,,,",
        "Aircraft Table,,,,,,,,,",
        "AircraftID,TypeCode,Year,Make,Model,GearType,EngineType,equipType (FAA),aircraftClass (FAA),complexAircraft (FAA),highPerformance (FAA)",
        "N125CM,CH7A,,Bellanca,7ECA,fixed_tailwheel,Piston,aircraft,airplane_single_engine_land,,",
        "N198JJ,8KCAB,,American Champion,8KCAB,fixed_tailwheel,Piston,aircraft,airplane_single_engine_land,,",
        ",,,,,,,,,",
        "Flights Table,,,,,,,,,",
        "Date,AircraftID,From,To,TimeOut,TimeIn,TotalTime,Night,ActualInstrument,SimulatedInstrument,CrossCountry,DualGiven,PIC,SIC,DualReceived,Solo,DayLandingsFullStop,NightLandingsFullStop,PilotComments,InstructorComments,Distance",
        "2023-01-01,N125CM,KOAK,KSFO,14:00,16:00,2.0,0.0,0.0,0.0,0.0,0.0,2.0,0.0,0.0,2.0,1,0,First solo,,10",
        "2023-01-02,N198JJ,KSFO,KOAK,,,1.5,0.0,0.0,0.0,0.0,0.0,1.5,0.0,0.0,1.5,1,0,,Instructor comment,8",
        "2022-12-15,N125CM,KPAO,KPAO,09:00,10:30,1.5,0.5,0.0,0.3,0.0,0.0,0.0,0.0,1.5,0.0,6,1,\"Pattern work, night\nlandings\",,",
    ]
    .join("\n")
        + "\n"
}
