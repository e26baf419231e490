//! Tests for loading the registry from aircraft table rows

use super::*;
use crate::app::services::aircraft_registry::{AircraftRegistry, parse_aircraft_record};
use crate::app::services::logbook_parser::split_sections;

#[test]
fn test_parse_aircraft_record() {
    let row = create_test_aircraft_row("N125CM", "CH7A", "fixed_tailwheel")
        .with("complexAircraft (FAA)", "x")
        .with("highPerformance (FAA)", "no");

    let aircraft = parse_aircraft_record(&row, &create_test_config()).unwrap();

    assert_eq!(aircraft.registration, "N125CM");
    assert_eq!(aircraft.type_code, "CH7A");
    assert_eq!(aircraft.icao_type_code.as_deref(), Some("CH7A"));
    assert_eq!(aircraft.make.as_deref(), Some("American Champion"));
    assert!(aircraft.is_tailwheel());
    assert!(aircraft.complex);
    assert!(!aircraft.high_performance);
}

#[test]
fn test_blank_cells_take_defaults() {
    let row = RawRow::new()
        .with("AircraftID", "N1")
        .with("TypeCode", "")
        .with("GearType", "")
        .with("aircraftClass (FAA)", "");

    let aircraft = parse_aircraft_record(&row, &create_test_config()).unwrap();

    assert_eq!(aircraft.type_code, "UNKNOWN");
    assert_eq!(aircraft.icao_type_code, None);
    assert_eq!(aircraft.gear_type, GearType::Tricycle);
    assert!(aircraft.category_class.is_asel());
}

#[test]
fn test_row_without_id_is_skipped() {
    let row = create_test_aircraft_row("", "C172", "fixed_tricycle");
    assert!(parse_aircraft_record(&row, &create_test_config()).is_none());
}

#[test]
fn test_load_from_rows_counts() {
    let rows = vec![
        create_test_aircraft_row("N125CM", "CH7A", "fixed_tailwheel"),
        create_test_aircraft_row("N198JJ", "CH8A", "fixed_tailwheel"),
        create_test_aircraft_row("N125CM", "C172", "fixed_tricycle"),
        create_test_aircraft_row("", "C172", "fixed_tricycle"),
    ];

    let (registry, stats) = AircraftRegistry::load_from_rows(&rows, &create_test_config());

    assert_eq!(registry.len(), 2);
    assert_eq!(stats.rows_read, 4);
    assert_eq!(stats.aircraft_loaded, 2);
    assert_eq!(stats.duplicates_ignored, 1);
    assert_eq!(stats.blank_ids_skipped, 1);
    assert_eq!(registry.get("N125CM").unwrap().type_code, "CH7A");
    assert!(stats.summary().contains("Loaded 2 aircraft from 4 rows"));
}

#[test]
fn test_load_from_section() {
    let content = "Aircraft Table,,,\n\
        AircraftID,TypeCode,GearType,aircraftClass (FAA)\n\
        N125CM,CH7A,fixed_tailwheel,airplane_single_engine_land\n\
        N44,PA44,retractable_tricycle,airplane_multi_engine_land\n\
        Flights Table,,,\n\
        Date,AircraftID,TotalTime\n";
    let config = create_test_config();
    let sections = split_sections(content.as_bytes(), &config, "test.csv").unwrap();

    let (registry, stats) = AircraftRegistry::load_from_section(&sections.aircraft, &config).unwrap();

    assert_eq!(stats.aircraft_loaded, 2);
    assert_eq!(
        registry.get("N44").unwrap().category_class,
        CategoryClass::AirplaneMultiEngineLand
    );
}

#[test]
fn test_load_from_section_requires_id_column() {
    let content = "Aircraft Table\nTail,TypeCode\nN1,C172\nFlights Table\nDate,AircraftID,TotalTime\n";
    let config = create_test_config();
    let sections = split_sections(content.as_bytes(), &config, "test.csv").unwrap();

    let error = AircraftRegistry::load_from_section(&sections.aircraft, &config).unwrap_err();
    assert_eq!(
        error.to_string(),
        "Required column 'AircraftID' not found in Aircraft Table"
    );
}
