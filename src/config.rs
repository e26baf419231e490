//! Configuration management and validation.
//!
//! Provides configuration structures for import leniency, the thresholds
//! used by the entry consistency rules, and endorsement validity.

use crate::app::models::InstructorEndorsement;
use crate::constants::{self, thresholds};
use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings controlling how an export is split and turned into entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Text identifying the aircraft section marker line
    pub aircraft_section_marker: String,

    /// Text identifying the flights section marker line
    pub flights_section_marker: String,

    /// Type designator given to aircraft missing from the aircraft table
    pub default_aircraft_type: String,

    /// Category/class given when none is recorded
    pub default_category_class: String,

    /// Gear type given when none is recorded
    pub default_gear_type: String,

    /// Fail the import when a flight names an aircraft absent from the aircraft table
    pub strict_aircraft: bool,

    /// Fail the import when the flights table has no rows
    pub require_entries: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            aircraft_section_marker: constants::AIRCRAFT_TABLE_MARKER.to_string(),
            flights_section_marker: constants::FLIGHTS_TABLE_MARKER.to_string(),
            default_aircraft_type: constants::DEFAULT_AIRCRAFT_TYPE.to_string(),
            default_category_class: constants::DEFAULT_CATEGORY_CLASS.to_string(),
            default_gear_type: constants::DEFAULT_GEAR_TYPE.to_string(),
            strict_aircraft: false,
            require_entries: true,
        }
    }
}

/// Thresholds used by the entry consistency rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Rounding tolerance in hours for day/night and PIC/dual sums
    pub time_tolerance_hours: f64,

    /// Landings per flight hour above which an entry is flagged
    pub max_landings_per_hour: f64,

    /// Distance above which a same-airport cross-country counts as a real route
    pub route_evidence_distance_nm: f64,

    /// Cross-country legs below this distance produce a warning
    pub cross_country_warning_distance_nm: f64,

    /// Accepted aircraft registration prefixes
    pub registration_prefixes: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            time_tolerance_hours: thresholds::TIME_TOLERANCE_HOURS,
            max_landings_per_hour: thresholds::MAX_LANDINGS_PER_HOUR,
            route_evidence_distance_nm: thresholds::ROUTE_EVIDENCE_DISTANCE_NM,
            cross_country_warning_distance_nm: thresholds::CROSS_COUNTRY_WARNING_DISTANCE_NM,
            registration_prefixes: constants::DEFAULT_REGISTRATION_PREFIXES
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

/// Instructor endorsement settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndorsementConfig {
    /// Days an endorsement stays valid after its start date
    pub validity_days: i64,
}

impl Default for EndorsementConfig {
    fn default() -> Self {
        Self {
            validity_days: thresholds::ENDORSEMENT_VALIDITY_DAYS,
        }
    }
}

impl EndorsementConfig {
    /// Endorsement starting on `start_date` with the configured validity
    pub fn endorsement_from(&self, start_date: NaiveDate) -> InstructorEndorsement {
        InstructorEndorsement::with_validity(start_date, self.validity_days)
    }
}

/// Global configuration for logbook processing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogbookConfig {
    /// Import settings
    pub import: ImportConfig,

    /// Consistency rule thresholds
    pub validation: ValidationConfig,

    /// Endorsement settings
    pub endorsement: EndorsementConfig,
}

impl LogbookConfig {
    /// Fail the import on flights referencing unlisted aircraft
    pub fn with_strict_aircraft(mut self) -> Self {
        self.import.strict_aircraft = true;
        self
    }

    /// Accept exports whose flights table is empty
    pub fn allow_empty_logbook(mut self) -> Self {
        self.import.require_entries = false;
        self
    }

    /// Set the rounding tolerance for time-sum comparisons
    pub fn with_time_tolerance(mut self, hours: f64) -> Self {
        self.validation.time_tolerance_hours = hours;
        self
    }

    /// Set the landing density threshold
    pub fn with_max_landings_per_hour(mut self, landings: f64) -> Self {
        self.validation.max_landings_per_hour = landings;
        self
    }

    /// Replace the accepted registration prefixes
    pub fn with_registration_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validation.registration_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the endorsement validity period
    pub fn with_endorsement_validity_days(mut self, days: i64) -> Self {
        self.endorsement.validity_days = days;
        self
    }

    /// Check the configuration for values the processor cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.import.aircraft_section_marker.trim().is_empty()
            || self.import.flights_section_marker.trim().is_empty()
        {
            return Err(Error::configuration("Section markers must not be empty"));
        }

        let validation = &self.validation;
        if !(validation.time_tolerance_hours >= 0.0) {
            return Err(Error::configuration(format!(
                "Time tolerance must be non-negative, got {}",
                validation.time_tolerance_hours
            )));
        }

        for (name, value) in [
            ("max_landings_per_hour", validation.max_landings_per_hour),
            (
                "route_evidence_distance_nm",
                validation.route_evidence_distance_nm,
            ),
            (
                "cross_country_warning_distance_nm",
                validation.cross_country_warning_distance_nm,
            ),
        ] {
            if !(value > 0.0) {
                return Err(Error::configuration(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if validation.registration_prefixes.is_empty()
            || validation
                .registration_prefixes
                .iter()
                .any(|p| p.trim().is_empty())
        {
            return Err(Error::configuration(
                "At least one non-empty registration prefix is required",
            ));
        }

        if self.endorsement.validity_days <= 0 {
            return Err(Error::configuration(format!(
                "Endorsement validity must be positive, got {} days",
                self.endorsement.validity_days
            )));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}
