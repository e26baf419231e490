//! Logbook Processor Library
//!
//! A Rust library for turning ForeFlight pilot logbook exports into typed,
//! validated flight records with running totals and currency statistics.
//!
//! This library provides tools for:
//! - Parsing the two-section export (aircraft table + flights table) into typed entries
//! - Building a per-import aircraft registry with lenient defaults for unknown tail numbers
//! - Cross-checking every entry against FAA logging consistency rules without aborting the batch
//! - Accumulating chronological running totals across nine flight-time dimensions
//! - Aggregating statistics over calendar and trailing windows
//! - Finding PIC flights that fall outside instructor endorsement coverage

pub mod config;
pub mod constants;
pub mod logging;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod aircraft_registry;
        pub mod endorsement_checker;
        pub mod entry_validator;
        pub mod file_validation;
        pub mod logbook_parser;
        pub mod logbook_processor;
        pub mod running_totals;
        pub mod statistics;
    }
}

// Re-export commonly used types
pub use app::models::{
    AggregatedEntry, Aircraft, Airport, CategoryClass, Diagnostics, FlightConditions, GearType,
    InstructorEndorsement, LogbookEntry, LogbookEntryBuilder, PilotRole, RunningTotals,
    ValidatedEntry,
};
pub use app::services::aircraft_registry::AircraftRegistry;
pub use app::services::endorsement_checker::{
    CoverageGap, EndorsementReport, UnendorsedFlight, check_endorsements, find_coverage_gaps,
};
pub use app::services::entry_validator::{EntryValidator, IcaoDesignatorTable, TypeDesignatorLookup};
pub use app::services::logbook_parser::LogbookImporter;
pub use app::services::logbook_processor::{LogbookProcessor, ProcessedLogbook};
pub use app::services::running_totals::accumulate;
pub use app::services::statistics::{FlightStatistics, WindowedStatistics, aggregate};
pub use config::LogbookConfig;

/// Result type alias for the logbook processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for file-level logbook processing failures
///
/// Entry-level consistency problems are never reported through this type;
/// they travel as [`Diagnostics`] on each validated entry.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// Required section marker absent from the export
    #[error("Could not find {marker} section")]
    MissingSection { marker: String },

    /// Section marker present but no header row follows it
    #[error("No header row found after {section} marker")]
    MissingHeader { section: String },

    /// Required column absent from a section header
    #[error("Required column '{column}' not found in {section}")]
    MissingColumn { section: String, column: String },

    /// A flight row could not be turned into an entry (fails the whole import)
    #[error("Error processing flight {row}: {message}")]
    RowImport { row: usize, message: String },

    /// Flights table contained no rows
    #[error("No valid entries found in the logbook")]
    EmptyLogbook,

    /// Flight references an aircraft missing from the aircraft table (strict mode)
    #[error("Aircraft not found in aircraft table: {registration}")]
    UnknownAircraft { registration: String },

    /// Structural data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a missing section error
    pub fn missing_section(marker: impl Into<String>) -> Self {
        Self::MissingSection {
            marker: marker.into(),
        }
    }

    /// Create a missing header error
    pub fn missing_header(section: impl Into<String>) -> Self {
        Self::MissingHeader {
            section: section.into(),
        }
    }

    /// Create a missing column error
    pub fn missing_column(section: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            section: section.into(),
            column: column.into(),
        }
    }

    /// Create a row import error for a 1-based flight row index
    pub fn row_import(row: usize, message: impl Into<String>) -> Self {
        Self::RowImport {
            row,
            message: message.into(),
        }
    }

    /// Create an unknown aircraft error
    pub fn unknown_aircraft(registration: impl Into<String>) -> Self {
        Self::UnknownAircraft {
            registration: registration.into(),
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Whether this error aborts an import (as opposed to I/O trouble before parsing began)
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingSection { .. }
                | Self::MissingHeader { .. }
                | Self::MissingColumn { .. }
                | Self::RowImport { .. }
                | Self::EmptyLogbook
                | Self::UnknownAircraft { .. }
        )
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}
