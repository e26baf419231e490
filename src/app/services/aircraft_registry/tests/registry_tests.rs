//! Tests for registry lookups and defaulting

use super::*;
use crate::Error;
use crate::app::services::aircraft_registry::AircraftRegistry;

#[test]
fn test_registry_new_is_empty() {
    let registry = AircraftRegistry::new(&create_test_config());
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(!registry.is_strict());
}

#[test]
fn test_first_description_wins() {
    let mut registry = AircraftRegistry::new(&create_test_config());

    assert!(registry.insert(create_test_aircraft("N125CM", "CH7A")));
    assert!(!registry.insert(create_test_aircraft("N125CM", "C172")));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("N125CM").unwrap().type_code, "CH7A");
}

#[test]
fn test_iteration_keeps_first_seen_order() {
    let registry = AircraftRegistry::from_aircraft(
        vec![
            create_test_aircraft("N3", "C172"),
            create_test_aircraft("N1", "PA28"),
            create_test_aircraft("N2", "SR22"),
        ],
        &create_test_config(),
    );

    let order: Vec<&str> = registry.iter().map(|a| a.registration.as_str()).collect();
    assert_eq!(order, vec!["N3", "N1", "N2"]);
}

#[test]
fn test_unknown_aircraft_gets_lenient_default() {
    let registry = AircraftRegistry::new(&create_test_config());

    let aircraft = registry.resolve("N999ZZ").unwrap();
    assert_eq!(aircraft.registration, "N999ZZ");
    assert_eq!(aircraft.type_code, "UNKNOWN");
    assert_eq!(aircraft.category_class, CategoryClass::AirplaneSingleEngineLand);
    assert_eq!(aircraft.gear_type, GearType::Tricycle);
    assert_eq!(aircraft.icao_type_code, None);
}

#[test]
fn test_strict_registry_rejects_unknown_aircraft() {
    let mut config = create_test_config();
    config.strict_aircraft = true;
    let registry = AircraftRegistry::new(&config);

    assert!(matches!(
        registry.resolve("N999ZZ"),
        Err(Error::UnknownAircraft { .. })
    ));

    // An empty id is left for validation to report
    let blank = registry.resolve("").unwrap();
    assert_eq!(blank.registration, "");
}

#[test]
fn test_custom_defaults() {
    let mut config = create_test_config();
    config.default_aircraft_type = "ZZZZ".to_string();
    config.default_category_class = "glider".to_string();
    config.default_gear_type = "fixed_tailwheel".to_string();
    let registry = AircraftRegistry::new(&config);

    let aircraft = registry.default_aircraft("N1");
    assert_eq!(aircraft.type_code, "ZZZZ");
    assert_eq!(aircraft.category_class, CategoryClass::Glider);
    assert!(aircraft.is_tailwheel());
}
