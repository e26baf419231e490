use super::*;
use crate::app::services::statistics::aircraft_usage;

#[test]
fn test_usage_sorted_by_flights() {
    let c172 = create_test_aircraft("N12345", CategoryClass::AirplaneSingleEngineLand);
    let citabria = create_test_tailwheel("N125CM");

    let entries = vec![
        create_test_flight(date(2024, 1, 1), c172.clone(), 1.0),
        create_test_flight(date(2024, 1, 2), citabria.clone(), 0.8),
        create_test_flight(date(2024, 1, 3), citabria.clone(), 0.7),
        create_test_flight(date(2024, 1, 4), citabria, 1.1),
    ];

    let usage = aircraft_usage(&entries);
    assert_eq!(usage.len(), 2);
    assert_eq!(usage[0].registration, "N125CM");
    assert_eq!(usage[0].aircraft_type, "CH7A");
    assert_eq!(usage[0].flights, 3);
    assert_eq!(usage[0].total_time, 2.6);
    assert_eq!(usage[1].registration, "N12345");
    assert_eq!(usage[1].flights, 1);
}

#[test]
fn test_usage_ties_by_registration_and_skips_ground() {
    let ground = LogbookEntry::builder(
        date(2024, 2, 1),
        Aircraft::new("", "", CategoryClass::AirplaneSingleEngineLand),
    )
    .ground_training(1.5)
    .build_as_of(test_today())
    .unwrap();

    let entries = vec![
        create_test_flight(date(2024, 2, 2), create_test_aircraft("N9", CategoryClass::AirplaneSingleEngineLand), 1.0),
        ground,
        create_test_flight(date(2024, 2, 3), create_test_aircraft("N1", CategoryClass::AirplaneSingleEngineLand), 1.0),
    ];

    let registrations: Vec<String> = aircraft_usage(&entries)
        .into_iter()
        .map(|usage| usage.registration)
        .collect();
    assert_eq!(registrations, vec!["N1", "N9"]);
}

#[test]
fn test_usage_of_empty_logbook() {
    let entries: Vec<LogbookEntry> = Vec::new();
    assert!(aircraft_usage(&entries).is_empty());
}
