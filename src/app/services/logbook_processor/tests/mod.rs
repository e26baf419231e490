//! Test utilities for pipeline testing

use chrono::NaiveDate;

use crate::app::services::logbook_processor::LogbookProcessor;
use crate::config::LogbookConfig;


pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn test_today() -> NaiveDate {
    date(2024, 6, 1)
}

/// Helper to create a processor with default settings and a fixed today
pub fn create_test_processor() -> LogbookProcessor {
    LogbookProcessor::new(LogbookConfig::default())
        .unwrap()
        .with_today(test_today())
}

/// Export with one clean flight, one rule violation, one warning and one
/// flight in an aircraft missing from the aircraft table, listed out of
/// date order
pub fn create_test_export() -> String {
    [
        "ForeFlight Logbook Import,This row is required for importing into ForeFlight. Do not delete or modify.,,,,",
        ",,,,,",
        "Aircraft Table,,,,,",
        "AircraftID,TypeCode,Make,Model,GearType,aircraftClass (FAA)",
        "N125CM,CH7A,American Champion,7ECA,fixed_tailwheel,airplane_single_engine_land",
        "N198JJ,CH8A,American Champion,8KCAB,fixed_tailwheel,airplane_single_engine_land",
        ",,,,,",
        "Flights Table,,,,,",
        "Date,AircraftID,From,To,TimeOut,TimeIn,TotalTime,Night,ActualInstrument,SimulatedInstrument,CrossCountry,DualGiven,PIC,SIC,DualReceived,Solo,DayLandingsFullStop,NightLandingsFullStop,PilotComments,InstructorComments,Distance",
        "2024-05-20,N125CM,KPAO,KSQL,09:00,10:30,1.5,0.0,0.0,0.0,0.0,0.0,1.5,0.0,0.0,0.0,1,0,Local flight,,",
        "2024-01-10,N198JJ,KPAO,KPAO,,,1.0,0.0,0.0,0.0,1.0,0.0,1.0,0.0,0.0,0.0,2,0,Pattern work,,",
        "2023-12-01,N125CM,KPAO,KMRY,,,2.0,0.5,0.0,0.0,2.0,0.0,2.0,0.0,0.0,0.0,1,1,,,42",
        "2023-05-01,N999XX,KPAO,KHAF,,,1.0,0.0,0.0,0.0,0.0,0.0,0.0,0.0,1.0,0.0,1,0,Dual lesson,,",
    ]
    .join("\n")
        + "\n"
}
