//! Logbook statistics
//!
//! Reduces entries to explicit [`FlightStatistics`] structs, either over a
//! whole logbook or over the standard reporting windows, and summarizes
//! usage per aircraft.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use logbook_processor::app::services::statistics::{WindowedStatistics, aggregate};
//! use logbook_processor::LogbookEntry;
//!
//! let entries: Vec<LogbookEntry> = Vec::new();
//! let stats = aggregate(&entries);
//! assert_eq!(stats.total_time, 0.0);
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let windows = WindowedStatistics::compute(&entries, today);
//! assert_eq!(windows.last_30_days.total_landings, 0);
//! ```

pub mod aggregator;
pub mod aircraft_usage;
pub mod windows;

#[cfg(test)]
pub mod tests;

pub use aggregator::{FlightStatistics, aggregate};
pub use aircraft_usage::{AircraftUsage, aircraft_usage};
pub use windows::{StatisticsWindow, WindowedStatistics};
