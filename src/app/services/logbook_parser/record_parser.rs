//! Individual flight row parsing
//!
//! Turns one flights-table row into a [`LogbookEntry`], resolving its aircraft
//! through the registry and inferring the pilot role when none is given.

use chrono::NaiveDate;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::warn;

use super::field_parsers::{
    FieldSource, get_optional_field, parse_distance, parse_hours, parse_optional_clock_time,
    parse_optional_count, parse_optional_string, parse_count, parse_required_date,
};
use super::stats::ImportStats;
use crate::Result;
use crate::app::models::{Airport, FlightConditions, LogbookEntry, PilotRole};
use crate::app::services::aircraft_registry::AircraftRegistry;
use crate::constants::flight_columns as col;

// =============================================================================
// Raw rows
// =============================================================================

/// A cell of a pre-materialized row
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
}

impl CellValue {
    fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::Number(number) => Cow::Owned(number.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        Self::Number(value as f64)
    }
}

/// A flight or aircraft row keyed by column name
///
/// Used when a caller has already split the export into tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: set a cell
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

impl FieldSource for RawRow {
    fn raw_field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.cells.get(name).map(CellValue::as_text)
    }

    fn has_column(&self, name: &str) -> bool {
        self.cells.contains_key(name)
    }
}

// =============================================================================
// Flight rows
// =============================================================================

/// Infer the pilot role from logged times
///
/// Instruction given wins over instruction received, which wins over PIC and
/// then SIC time. A row with none of them is a PIC flight.
pub fn infer_pilot_role(dual_given: f64, dual_received: f64, pic: f64, sic: f64) -> PilotRole {
    if dual_given > 0.0 {
        PilotRole::Instructor
    } else if dual_received > 0.0 {
        PilotRole::Student
    } else if pic > 0.0 {
        PilotRole::Pic
    } else if sic > 0.0 {
        PilotRole::Sic
    } else {
        PilotRole::Pic
    }
}

fn optional_airport<S: FieldSource + ?Sized>(source: &S, field_name: &str) -> Option<Airport> {
    get_optional_field(source, field_name).map(|identifier| Airport::new(identifier.into_owned()))
}

/// Parse a single flight row
///
/// Numeric cells degrade to zero; a missing or malformed date, an aircraft
/// rejected by a strict registry, or a structurally invalid entry is an error.
pub fn parse_flight_record<S: FieldSource + ?Sized>(
    source: &S,
    registry: &AircraftRegistry,
    stats: &mut ImportStats,
    today: NaiveDate,
) -> Result<LogbookEntry> {
    let date = parse_required_date(source, col::DATE)?;

    let aircraft_id = get_optional_field(source, col::AIRCRAFT_ID).unwrap_or_default();
    if !aircraft_id.is_empty() && !registry.contains(&aircraft_id) {
        if !stats.unknown_aircraft_ids.iter().any(|id| *id == *aircraft_id) {
            warn!(
                "Aircraft '{}' not in aircraft table, using default description",
                aircraft_id
            );
        }
        stats.record_defaulted_aircraft(&aircraft_id);
    }
    let aircraft = registry.resolve(&aircraft_id)?;

    let total_time = parse_hours(source, col::TOTAL_TIME);
    let night = parse_hours(source, col::NIGHT);
    let dual_given = parse_hours(source, col::DUAL_GIVEN);
    let dual_received = parse_hours(source, col::DUAL_RECEIVED);
    let pic_time = parse_hours(source, col::PIC);
    let sic_time = parse_hours(source, col::SIC);

    let conditions = FlightConditions {
        day: (total_time - night).max(0.0),
        night,
        actual_instrument: parse_hours(source, col::ACTUAL_INSTRUMENT),
        simulated_instrument: parse_hours(source, col::SIMULATED_INSTRUMENT),
        cross_country: parse_hours(source, col::CROSS_COUNTRY),
    };

    let pilot_role = match get_optional_field(source, col::PILOT_ROLE) {
        Some(label) => PilotRole::parse(&label),
        None => infer_pilot_role(dual_given, dual_received, pic_time, sic_time),
    };

    let mut builder = LogbookEntry::builder(date, aircraft)
        .total_time(total_time)
        .clock_times(
            parse_optional_clock_time(source, col::TIME_OUT),
            parse_optional_clock_time(source, col::TIME_IN),
        )
        .conditions(conditions)
        .pilot_role(pilot_role)
        .dual_given(dual_given)
        .dual_received(dual_received)
        .pic_time(pic_time)
        .sic_time(sic_time)
        .solo_time(parse_hours(source, col::SOLO))
        .ground_training(parse_hours(source, col::GROUND_TRAINING))
        .landings(
            parse_count(source, col::DAY_LANDINGS),
            parse_count(source, col::NIGHT_LANDINGS),
        )
        .takeoffs(
            parse_optional_count(source, col::DAY_TAKEOFFS),
            parse_optional_count(source, col::NIGHT_TAKEOFFS),
        )
        .distance_nm(parse_distance(source, col::DISTANCE))
        .instructor(
            parse_optional_string(source, col::INSTRUCTOR_NAME),
            parse_optional_string(source, col::INSTRUCTOR_COMMENTS),
        );

    if let Some(departure) = optional_airport(source, col::FROM) {
        builder = builder.departure(departure);
    }
    if let Some(destination) = optional_airport(source, col::TO) {
        builder = builder.destination(destination);
    }
    if let Some(route) = parse_optional_string(source, col::ROUTE) {
        builder = builder.route(route);
    }
    if let Some(remarks) = parse_optional_string(source, col::PILOT_COMMENTS)
        .or_else(|| parse_optional_string(source, col::INSTRUCTOR_COMMENTS))
    {
        builder = builder.remarks(remarks);
    }

    builder.build_as_of(today)
}
