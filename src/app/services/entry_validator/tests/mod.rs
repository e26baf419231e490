//! Test utilities for entry validation testing

use chrono::NaiveDate;

use crate::app::models::{Aircraft, CategoryClass, LogbookEntry, LogbookEntryBuilder};
use crate::app::services::entry_validator::EntryValidator;
use crate::config::ValidationConfig;

mod route_evidence_tests;

pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

/// Helper to create a validator with default thresholds
pub fn create_test_validator() -> EntryValidator {
    EntryValidator::new(ValidationConfig::default())
}

/// Builder for a clean 1.5 hour PIC flight, KOAK to KSFO in a C172
pub fn create_test_builder() -> LogbookEntryBuilder {
    let aircraft = Aircraft::new("N12345", "C172", CategoryClass::AirplaneSingleEngineLand)
        .with_icao_type_code("C172");

    LogbookEntry::builder(NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(), aircraft)
        .between("KOAK", "KSFO")
        .total_time(1.5)
        .day(1.5)
        .pic_time(1.5)
        .landings(1, 0)
}

pub fn build(builder: LogbookEntryBuilder) -> LogbookEntry {
    builder.build_as_of(test_today()).unwrap()
}

/// Errors reported for the entry built by `builder`
pub fn errors_for(builder: LogbookEntryBuilder) -> String {
    create_test_validator()
        .validate(build(builder))
        .diagnostics()
        .error_explanation
        .clone()
        .unwrap_or_default()
}
