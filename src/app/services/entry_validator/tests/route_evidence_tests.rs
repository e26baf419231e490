use super::*;
use crate::app::services::entry_validator::route_evidence::{
    entry_distance, has_route_evidence, has_route_separator, intermediate_airports,
    remarks_distance, route_waypoints,
};

#[test]
fn test_remarks_distance() {
    assert_eq!(remarks_distance("Distance: 42nm"), Some(42.0));
    assert_eq!(remarks_distance("DISTANCE:63.5 nm, smooth air"), Some(63.5));
    assert_eq!(remarks_distance("Long flight"), None);
}

#[test]
fn test_structured_distance_wins_over_remarks() {
    let entry = build(
        create_test_builder()
            .distance_nm(Some(70.0))
            .remarks("Distance: 20nm"),
    );
    assert_eq!(entry_distance(&entry), Some(70.0));

    let entry = build(create_test_builder().remarks("Distance: 20nm"));
    assert_eq!(entry_distance(&entry), Some(20.0));

    let entry = build(create_test_builder().remarks("Distance: 0nm"));
    assert_eq!(entry_distance(&entry), None);
}

#[test]
fn test_route_separator_forms() {
    assert!(has_route_separator("KPAO-KSJC"));
    assert!(has_route_separator("KPAO -> KSJC"));
    assert!(has_route_separator("KPAO → KSJC"));
    assert!(has_route_separator("KPAO/KSJC"));
    assert!(!has_route_separator("kpao-ksjc"));
    assert!(!has_route_separator("Pattern work"));
}

#[test]
fn test_route_separator_ignores_jargon_and_numbers() {
    assert!(!has_route_separator("VOR-DME approach"));
    assert!(!has_route_separator("ILS/LOC practice"));
    assert!(!has_route_separator("180-360 turns"));
    assert!(has_route_separator("VOR-DME approach, then KPAO-KMRY"));
    assert!(has_route_separator("Steep turns 28R-KMRY"));
}

#[test]
fn test_intermediate_airports_skip_endpoints_and_jargon() {
    let found = intermediate_airports(
        "VFR to KMRY with CFI, ILS 28R, landed KPAO",
        Some("KPAO"),
        Some("KPAO"),
    );
    assert_eq!(found, vec!["KMRY", "28R"]);

    let found = intermediate_airports("Flew 1200 feet", Some("KPAO"), Some("KPAO"));
    assert!(found.is_empty());
}

#[test]
fn test_route_waypoints() {
    assert_eq!(
        route_waypoints("KPAO KMRY KSNS KPAO", Some("KPAO"), Some("KPAO")),
        vec!["KMRY", "KSNS"]
    );
    assert_eq!(
        route_waypoints("kpao-kmry-kpao", Some("KPAO"), Some("KPAO")),
        vec!["kmry"]
    );
    assert!(route_waypoints("KPAO KPAO", Some("KPAO"), Some("KPAO")).is_empty());
}

#[test]
fn test_route_evidence_threshold() {
    let near = build(
        create_test_builder()
            .between("KPAO", "KPAO")
            .distance_nm(Some(25.0)),
    );
    assert!(!has_route_evidence(&near, 25.0));

    let far = build(
        create_test_builder()
            .between("KPAO", "KPAO")
            .distance_nm(Some(25.5)),
    );
    assert!(has_route_evidence(&far, 25.0));
}

#[test]
fn test_no_route_evidence_for_local_flight() {
    let entry = build(
        create_test_builder()
            .between("KPAO", "KPAO")
            .route("KPAO")
            .remarks("Pattern work at KPAO, 6 touch and goes"),
    );
    assert!(!has_route_evidence(&entry, 25.0));
}
