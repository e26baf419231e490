//! Flight entry structures: airports, conditions, pilot role and the entry itself

use super::aircraft::Aircraft;
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Airport
// =============================================================================

/// Airport reference
///
/// An airport without an identifier is a legitimate "not logged" value and is
/// distinct from a parsing failure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Airport {
    /// ICAO/IATA/FAA identifier (e.g., "KPAO")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Airport {
    /// Create an airport from an identifier; blank identifiers yield an unknown airport
    pub fn new(identifier: impl Into<String>) -> Self {
        let identifier = identifier.into().trim().to_string();
        Self {
            identifier: (!identifier.is_empty()).then_some(identifier),
            name: None,
        }
    }

    /// Builder pattern: attach the airport name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when the airport carries an identifier
    pub fn is_known(&self) -> bool {
        self.identifier.is_some()
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }
}

// =============================================================================
// Flight Conditions
// =============================================================================

/// Hour breakdown of a flight by condition
///
/// Day and night are expected to add up to total time when both are logged;
/// that is checked by the validator, not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightConditions {
    pub day: f64,
    pub night: f64,
    pub actual_instrument: f64,
    pub simulated_instrument: f64,
    pub cross_country: f64,
}

impl FlightConditions {
    /// Actual plus simulated instrument time
    pub fn total_instrument(&self) -> f64 {
        self.actual_instrument + self.simulated_instrument
    }

    fn components(&self) -> [(&'static str, f64); 5] {
        [
            ("day", self.day),
            ("night", self.night),
            ("actual instrument", self.actual_instrument),
            ("simulated instrument", self.simulated_instrument),
            ("cross-country", self.cross_country),
        ]
    }
}

// =============================================================================
// Pilot Role
// =============================================================================

/// Role the pilot flew in
///
/// Unknown labels from an explicit role column are kept as `Unrecognized`
/// so the validator can report them instead of the import failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PilotRole {
    Pic,
    Sic,
    Student,
    Instructor,
    /// Flight with both PIC and dual received time
    Split,
    Unrecognized(String),
}

impl PilotRole {
    /// Labels of the roles the validator accepts
    pub const RECOGNIZED: &'static [&'static str] = &["PIC", "SIC", "STUDENT", "INSTRUCTOR", "SPLIT"];

    /// Parse a role label (case-insensitive)
    pub fn parse(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "PIC" => Self::Pic,
            "SIC" => Self::Sic,
            "STUDENT" => Self::Student,
            "INSTRUCTOR" | "CFI" => Self::Instructor,
            "SPLIT" => Self::Split,
            _ => Self::Unrecognized(label.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pic => "PIC",
            Self::Sic => "SIC",
            Self::Student => "STUDENT",
            Self::Instructor => "INSTRUCTOR",
            Self::Split => "SPLIT",
            Self::Unrecognized(label) => label,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Default for PilotRole {
    fn default() -> Self {
        Self::Pic
    }
}

impl fmt::Display for PilotRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Logbook Entry
// =============================================================================

/// One logbook row as imported, before any consistency checks
///
/// Construct through [`LogbookEntry::builder`], which enforces the structural
/// invariants (date not in the future, hours finite and non-negative).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogbookEntry {
    pub date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<NaiveTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<NaiveTime>,

    pub total_time: f64,

    pub aircraft: Aircraft,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure: Option<Airport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Airport>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate: Option<Airport>,

    /// Route as logged (space separated waypoints), when the export has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,

    pub conditions: FlightConditions,

    pub pilot_role: PilotRole,

    pub dual_given: f64,
    pub dual_received: f64,
    pub pic_time: f64,
    pub sic_time: f64,
    pub solo_time: f64,
    pub ground_training: f64,

    pub landings_day: u32,
    pub landings_night: u32,

    /// Takeoff counts; `None` when the export had no takeoff columns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeoffs_day: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub takeoffs_night: Option<u32>,

    /// Leg distance in nautical miles; `None` when not logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_nm: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_comments: Option<String>,
}

impl LogbookEntry {
    /// Start building an entry for a flight on `date` in `aircraft`
    pub fn builder(date: NaiveDate, aircraft: Aircraft) -> LogbookEntryBuilder {
        LogbookEntryBuilder::new(date, aircraft)
    }

    pub fn departure_id(&self) -> Option<&str> {
        self.departure.as_ref().and_then(Airport::identifier)
    }

    pub fn destination_id(&self) -> Option<&str> {
        self.destination.as_ref().and_then(Airport::identifier)
    }

    /// "KOAK → KSFO", with "---" standing in for unlogged airports
    pub fn route_label(&self) -> String {
        format!(
            "{} → {}",
            self.departure_id().unwrap_or("---"),
            self.destination_id().unwrap_or("---")
        )
    }

    pub fn remarks_text(&self) -> &str {
        self.remarks.as_deref().unwrap_or("")
    }

    /// Day plus night full-stop landings, saturating at `u32::MAX`
    pub fn total_landings(&self) -> u32 {
        self.landings_day.saturating_add(self.landings_night)
    }

    /// Logged takeoffs, or full-stop landings when no takeoffs were recorded
    pub fn total_takeoffs(&self) -> u32 {
        match (self.takeoffs_day, self.takeoffs_night) {
            (None, None) => self.total_landings(),
            (day, night) => day.unwrap_or(0).saturating_add(night.unwrap_or(0)),
        }
    }

    /// Ground-training-only entries carry no flight time
    pub fn is_flight(&self) -> bool {
        self.total_time > 0.0
    }

    fn hour_fields(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        [
            ("total time", self.total_time),
            ("dual given", self.dual_given),
            ("dual received", self.dual_received),
            ("PIC time", self.pic_time),
            ("SIC time", self.sic_time),
            ("solo time", self.solo_time),
            ("ground training", self.ground_training),
        ]
        .into_iter()
        .chain(self.conditions.components())
    }

    /// Check structural invariants as of `today` (UTC calendar date)
    pub fn check_structure(&self, today: NaiveDate) -> Result<()> {
        if self.date > today {
            return Err(Error::data_validation(format!(
                "Flight date cannot be in the future: {}",
                self.date
            )));
        }

        for (name, value) in self.hour_fields() {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::data_validation(format!(
                    "Invalid {} value {}: must be a non-negative number of hours",
                    name, value
                )));
            }
        }

        if let Some(distance) = self.distance_nm {
            if !distance.is_finite() || distance < 0.0 {
                return Err(Error::data_validation(format!(
                    "Invalid distance {}: must be non-negative",
                    distance
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// Entry Builder
// =============================================================================

/// Builder for [`LogbookEntry`]
#[derive(Debug, Clone)]
pub struct LogbookEntryBuilder {
    entry: LogbookEntry,
}

impl LogbookEntryBuilder {
    fn new(date: NaiveDate, aircraft: Aircraft) -> Self {
        Self {
            entry: LogbookEntry {
                date,
                departure_time: None,
                arrival_time: None,
                total_time: 0.0,
                aircraft,
                departure: None,
                destination: None,
                alternate: None,
                route: None,
                conditions: FlightConditions::default(),
                pilot_role: PilotRole::Pic,
                dual_given: 0.0,
                dual_received: 0.0,
                pic_time: 0.0,
                sic_time: 0.0,
                solo_time: 0.0,
                ground_training: 0.0,
                landings_day: 0,
                landings_night: 0,
                takeoffs_day: None,
                takeoffs_night: None,
                distance_nm: None,
                remarks: None,
                instructor_name: None,
                instructor_comments: None,
            },
        }
    }

    pub fn total_time(mut self, hours: f64) -> Self {
        self.entry.total_time = hours;
        self
    }

    pub fn clock_times(mut self, departure: Option<NaiveTime>, arrival: Option<NaiveTime>) -> Self {
        self.entry.departure_time = departure;
        self.entry.arrival_time = arrival;
        self
    }

    pub fn departure(mut self, airport: Airport) -> Self {
        self.entry.departure = Some(airport);
        self
    }

    pub fn destination(mut self, airport: Airport) -> Self {
        self.entry.destination = Some(airport);
        self
    }

    pub fn alternate(mut self, airport: Airport) -> Self {
        self.entry.alternate = Some(airport);
        self
    }

    /// Set departure and destination from identifiers
    pub fn between(self, from: &str, to: &str) -> Self {
        self.departure(Airport::new(from)).destination(Airport::new(to))
    }

    pub fn route(mut self, route: impl Into<String>) -> Self {
        self.entry.route = Some(route.into());
        self
    }

    pub fn conditions(mut self, conditions: FlightConditions) -> Self {
        self.entry.conditions = conditions;
        self
    }

    pub fn day(mut self, hours: f64) -> Self {
        self.entry.conditions.day = hours;
        self
    }

    pub fn night(mut self, hours: f64) -> Self {
        self.entry.conditions.night = hours;
        self
    }

    pub fn actual_instrument(mut self, hours: f64) -> Self {
        self.entry.conditions.actual_instrument = hours;
        self
    }

    pub fn simulated_instrument(mut self, hours: f64) -> Self {
        self.entry.conditions.simulated_instrument = hours;
        self
    }

    pub fn cross_country(mut self, hours: f64) -> Self {
        self.entry.conditions.cross_country = hours;
        self
    }

    pub fn pilot_role(mut self, role: PilotRole) -> Self {
        self.entry.pilot_role = role;
        self
    }

    pub fn dual_given(mut self, hours: f64) -> Self {
        self.entry.dual_given = hours;
        self
    }

    pub fn dual_received(mut self, hours: f64) -> Self {
        self.entry.dual_received = hours;
        self
    }

    pub fn pic_time(mut self, hours: f64) -> Self {
        self.entry.pic_time = hours;
        self
    }

    pub fn sic_time(mut self, hours: f64) -> Self {
        self.entry.sic_time = hours;
        self
    }

    pub fn solo_time(mut self, hours: f64) -> Self {
        self.entry.solo_time = hours;
        self
    }

    pub fn ground_training(mut self, hours: f64) -> Self {
        self.entry.ground_training = hours;
        self
    }

    pub fn landings(mut self, day: u32, night: u32) -> Self {
        self.entry.landings_day = day;
        self.entry.landings_night = night;
        self
    }

    pub fn takeoffs(mut self, day: Option<u32>, night: Option<u32>) -> Self {
        self.entry.takeoffs_day = day;
        self.entry.takeoffs_night = night;
        self
    }

    pub fn distance_nm(mut self, distance: Option<f64>) -> Self {
        self.entry.distance_nm = distance;
        self
    }

    pub fn remarks(mut self, remarks: impl Into<String>) -> Self {
        self.entry.remarks = Some(remarks.into());
        self
    }

    pub fn instructor(mut self, name: Option<String>, comments: Option<String>) -> Self {
        self.entry.instructor_name = name;
        self.entry.instructor_comments = comments;
        self
    }

    /// Build the entry, checking the date against today's UTC date
    pub fn build(self) -> Result<LogbookEntry> {
        self.build_as_of(Utc::now().date_naive())
    }

    /// Build the entry, checking the date against an explicit `today`
    pub fn build_as_of(self, today: NaiveDate) -> Result<LogbookEntry> {
        self.entry.check_structure(today)?;
        Ok(self.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::CategoryClass;

    fn aircraft() -> Aircraft {
        Aircraft::new("N12345", "C172", CategoryClass::AirplaneSingleEngineLand)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_airport_truthiness() {
        assert!(Airport::new("KOAK").is_known());
        assert!(!Airport::new("   ").is_known());
        assert!(!Airport::default().is_known());
        assert_eq!(
            Airport::new("KOAK").with_name("Oakland").name.as_deref(),
            Some("Oakland")
        );
    }

    #[test]
    fn test_pilot_role_parsing() {
        assert_eq!(PilotRole::parse("pic"), PilotRole::Pic);
        assert_eq!(PilotRole::parse("Student"), PilotRole::Student);
        assert_eq!(PilotRole::parse("SPLIT"), PilotRole::Split);
        assert_eq!(
            PilotRole::parse("Passenger"),
            PilotRole::Unrecognized("Passenger".to_string())
        );
        assert!(!PilotRole::parse("Passenger").is_recognized());
        assert_eq!(PilotRole::default(), PilotRole::Pic);
    }

    #[test]
    fn test_builder_produces_entry() {
        let entry = LogbookEntry::builder(date(2023, 1, 1), aircraft())
            .total_time(1.5)
            .between("KOAK", "KSFO")
            .day(1.5)
            .pic_time(1.5)
            .landings(1, 0)
            .build_as_of(date(2024, 1, 1))
            .unwrap();

        assert_eq!(entry.route_label(), "KOAK → KSFO");
        assert_eq!(entry.total_landings(), 1);
        assert_eq!(entry.total_takeoffs(), 1);
        assert!(entry.is_flight());
    }

    #[test]
    fn test_future_date_rejected() {
        let result = LogbookEntry::builder(date(2024, 1, 2), aircraft())
            .total_time(1.0)
            .build_as_of(date(2024, 1, 1));

        let error = result.unwrap_err().to_string();
        assert!(error.contains("Flight date cannot be in the future"));
    }

    #[test]
    fn test_negative_hours_rejected() {
        let result = LogbookEntry::builder(date(2023, 1, 1), aircraft())
            .total_time(1.0)
            .night(-0.5)
            .build_as_of(date(2024, 1, 1));
        assert!(result.is_err());

        let result = LogbookEntry::builder(date(2023, 1, 1), aircraft())
            .total_time(f64::NAN)
            .build_as_of(date(2024, 1, 1));
        assert!(result.is_err());
    }

    #[test]
    fn test_route_label_with_missing_airports() {
        let entry = LogbookEntry::builder(date(2023, 1, 1), aircraft())
            .departure(Airport::new("KPAO"))
            .build_as_of(date(2024, 1, 1))
            .unwrap();
        assert_eq!(entry.route_label(), "KPAO → ---");
    }

    #[test]
    fn test_takeoffs_prefer_logged_counts() {
        let entry = LogbookEntry::builder(date(2023, 1, 1), aircraft())
            .total_time(1.0)
            .landings(2, 1)
            .takeoffs(Some(4), None)
            .build_as_of(date(2024, 1, 1))
            .unwrap();
        assert_eq!(entry.total_landings(), 3);
        assert_eq!(entry.total_takeoffs(), 4);
    }

    #[test]
    fn test_oversized_counts_saturate() {
        let entry = LogbookEntry::builder(date(2023, 1, 1), aircraft())
            .total_time(1.0)
            .landings(4_000_000_000, 1_000_000_000)
            .takeoffs(Some(u32::MAX), Some(5))
            .build_as_of(date(2024, 1, 1))
            .unwrap();
        assert_eq!(entry.total_landings(), u32::MAX);
        assert_eq!(entry.total_takeoffs(), u32::MAX);
    }
}
