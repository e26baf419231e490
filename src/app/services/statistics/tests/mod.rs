//! Test utilities for statistics testing

use chrono::NaiveDate;

use crate::app::models::{Aircraft, CategoryClass, GearType, LogbookEntry};

mod usage_tests;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn test_today() -> NaiveDate {
    date(2024, 6, 1)
}

/// Helper to create test aircraft
pub fn create_test_aircraft(registration: &str, category: CategoryClass) -> Aircraft {
    Aircraft::new(registration, "C172", category).with_icao_type_code("C172")
}

/// Helper to create a daytime PIC flight with one landing
pub fn create_test_flight(date: NaiveDate, aircraft: Aircraft, total: f64) -> LogbookEntry {
    LogbookEntry::builder(date, aircraft)
        .between("KOAK", "KSFO")
        .total_time(total)
        .day(total)
        .pic_time(total)
        .landings(1, 0)
        .build_as_of(test_today())
        .unwrap()
}

pub fn create_test_tailwheel(registration: &str) -> Aircraft {
    Aircraft::new(registration, "CH7A", CategoryClass::AirplaneSingleEngineLand)
        .with_gear(GearType::Tailwheel)
}
