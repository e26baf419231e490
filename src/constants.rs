//! Application constants for the logbook processor
//!
//! This module contains the export layout (section markers and column names),
//! default values, and domain thresholds used throughout the processor.

// =============================================================================
// Export Layout
// =============================================================================

/// Marker line introducing the aircraft section of a ForeFlight export
pub const AIRCRAFT_TABLE_MARKER: &str = "Aircraft Table";

/// Marker line introducing the flights section of a ForeFlight export
pub const FLIGHTS_TABLE_MARKER: &str = "Flights Table";

/// Banner ForeFlight writes on the first line of an importable export
pub const FOREFLIGHT_BANNER: &str = "ForeFlight Logbook Import";

/// Column names of the aircraft table
pub mod aircraft_columns {
    pub const AIRCRAFT_ID: &str = "AircraftID";
    pub const TYPE_CODE: &str = "TypeCode";
    pub const MAKE: &str = "Make";
    pub const MODEL: &str = "Model";
    pub const GEAR_TYPE: &str = "GearType";
    pub const AIRCRAFT_CLASS: &str = "aircraftClass (FAA)";
    pub const COMPLEX: &str = "complexAircraft (FAA)";
    pub const HIGH_PERFORMANCE: &str = "highPerformance (FAA)";

    /// Columns without which the aircraft table cannot be read
    pub const REQUIRED: &[&str] = &[AIRCRAFT_ID];
}

/// Column names of the flights table
pub mod flight_columns {
    pub const DATE: &str = "Date";
    pub const AIRCRAFT_ID: &str = "AircraftID";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const ROUTE: &str = "Route";
    pub const TIME_OUT: &str = "TimeOut";
    pub const TIME_IN: &str = "TimeIn";
    pub const TOTAL_TIME: &str = "TotalTime";
    pub const NIGHT: &str = "Night";
    pub const ACTUAL_INSTRUMENT: &str = "ActualInstrument";
    pub const SIMULATED_INSTRUMENT: &str = "SimulatedInstrument";
    pub const CROSS_COUNTRY: &str = "CrossCountry";
    pub const DUAL_GIVEN: &str = "DualGiven";
    pub const PIC: &str = "PIC";
    pub const SIC: &str = "SIC";
    pub const DUAL_RECEIVED: &str = "DualReceived";
    pub const SOLO: &str = "Solo";
    pub const GROUND_TRAINING: &str = "GroundTraining";
    pub const DAY_TAKEOFFS: &str = "DayTakeoffs";
    pub const NIGHT_TAKEOFFS: &str = "NightTakeoffs";
    pub const DAY_LANDINGS: &str = "DayLandingsFullStop";
    pub const NIGHT_LANDINGS: &str = "NightLandingsFullStop";
    pub const PILOT_COMMENTS: &str = "PilotComments";
    pub const INSTRUCTOR_COMMENTS: &str = "InstructorComments";
    pub const INSTRUCTOR_NAME: &str = "InstructorName";
    pub const DISTANCE: &str = "Distance";
    pub const PILOT_ROLE: &str = "PilotRole";

    /// Columns without which the flights table cannot be read
    pub const REQUIRED: &[&str] = &[DATE, AIRCRAFT_ID, TOTAL_TIME];
}

// =============================================================================
// Formats
// =============================================================================

/// Flight date format used by the export
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Clock time format used by the export
pub const CLOCK_FORMAT: &str = "%H:%M";

// =============================================================================
// Defaults
// =============================================================================

/// Type designator assigned to aircraft missing from the aircraft table
pub const DEFAULT_AIRCRAFT_TYPE: &str = "UNKNOWN";

/// Category/class assigned when the aircraft table leaves it blank
pub const DEFAULT_CATEGORY_CLASS: &str = "airplane_single_engine_land";

/// Gear type assigned when the aircraft table leaves it blank
pub const DEFAULT_GEAR_TYPE: &str = "tricycle";

/// Registration prefixes accepted by the registration format check (US, Canada, UK)
pub const DEFAULT_REGISTRATION_PREFIXES: &[&str] = &["N", "C-", "G-"];

// =============================================================================
// Validation Thresholds
// =============================================================================

pub mod thresholds {
    /// Rounding tolerance in hours for time-sum comparisons
    pub const TIME_TOLERANCE_HOURS: f64 = 0.1;

    /// Landings per flight hour above which an entry is flagged
    pub const MAX_LANDINGS_PER_HOUR: f64 = 15.0;

    /// Distance beyond which a same-airport flight counts as a genuine route
    pub const ROUTE_EVIDENCE_DISTANCE_NM: f64 = 25.0;

    /// Cross-country legs shorter than this draw a certificate-minimums warning
    pub const CROSS_COUNTRY_WARNING_DISTANCE_NM: f64 = 50.0;

    /// Days a solo endorsement remains valid after its start date
    pub const ENDORSEMENT_VALIDITY_DAYS: i64 = 90;
}

/// Uppercase remark tokens that look like airport codes but are not
pub const NON_AIRPORT_TOKENS: &[&str] = &[
    "ADF", "ATC", "ATIS", "CFI", "CFII", "CTAF", "DME", "DPE", "FAA", "GPS", "IFR", "ILS", "IMC",
    "LOC", "LPV", "MEI", "NDB", "PIC", "RNAV", "SIC", "SOLO", "TAA", "VFR", "VMC", "VOR", "WITH",
];
