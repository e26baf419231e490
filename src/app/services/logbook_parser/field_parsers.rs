//! Field parsing utilities for export rows
//!
//! Numeric cells are cleaned leniently: exports contain stray units, quotes
//! and empty cells, all of which degrade to a default instead of failing.
//! Only the flight date is parsed strictly.

use super::column_mapping::ColumnMapping;
use crate::constants::{CLOCK_FORMAT, DATE_FORMAT};
use crate::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use csv::StringRecord;
use std::borrow::Cow;
use tracing::{debug, warn};

/// A row whose cells can be looked up by column name
pub trait FieldSource {
    /// Raw cell text for `name`, or `None` when the column is absent
    fn raw_field(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Whether the row's table has the column at all
    fn has_column(&self, name: &str) -> bool;
}

/// A CSV record paired with its section's column mapping
#[derive(Debug, Clone, Copy)]
pub struct MappedRecord<'a> {
    pub record: &'a StringRecord,
    pub mapping: &'a ColumnMapping,
}

impl<'a> MappedRecord<'a> {
    pub fn new(record: &'a StringRecord, mapping: &'a ColumnMapping) -> Self {
        Self { record, mapping }
    }
}

impl FieldSource for MappedRecord<'_> {
    fn raw_field(&self, name: &str) -> Option<Cow<'_, str>> {
        self.mapping
            .get_index(name)
            .and_then(|index| self.record.get(index))
            .map(Cow::Borrowed)
    }

    fn has_column(&self, name: &str) -> bool {
        self.mapping.has_column(name)
    }
}

// =============================================================================
// Text
// =============================================================================

/// Get an optional field value, trimmed, with empty cells treated as absent
pub fn get_optional_field<'a, S: FieldSource + ?Sized>(
    source: &'a S,
    field_name: &str,
) -> Option<Cow<'a, str>> {
    source
        .raw_field(field_name)
        .map(|value| match value {
            Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
            Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
        })
        .filter(|value| !value.is_empty())
}

/// Get a required field value
pub fn get_required_field<'a, S: FieldSource + ?Sized>(
    source: &'a S,
    field_name: &str,
) -> Result<Cow<'a, str>> {
    if !source.has_column(field_name) {
        return Err(Error::data_validation(format!(
            "Required column '{}' not found",
            field_name
        )));
    }

    get_optional_field(source, field_name).ok_or_else(|| {
        Error::data_validation(format!("Empty value for required column '{}'", field_name))
    })
}

/// Parse an optional text field into an owned string
pub fn parse_optional_string<S: FieldSource + ?Sized>(
    source: &S,
    field_name: &str,
) -> Option<String> {
    get_optional_field(source, field_name).map(Cow::into_owned)
}

// =============================================================================
// Numbers
// =============================================================================

/// Clean a float cell: keep digits, '.' and '-', then parse
///
/// Empty or unparseable values yield `default`.
pub fn clean_float(value: &str, default: f64) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if cleaned.is_empty() {
        return default;
    }

    match cleaned.parse::<f64>() {
        Ok(parsed) => parsed,
        Err(_) => {
            debug!("Could not parse '{}' as a number, using {}", value, default);
            default
        }
    }
}

/// Clean a count cell: keep digits and '.', parse, truncate to an integer
pub fn clean_count(value: &str, default: u32) -> u32 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return default;
    }

    match cleaned.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed <= u32::MAX as f64 => parsed.trunc() as u32,
        _ => {
            debug!("Could not parse '{}' as a count, using {}", value, default);
            default
        }
    }
}

/// Parse an hours field, defaulting to 0.0
pub fn parse_hours<S: FieldSource + ?Sized>(source: &S, field_name: &str) -> f64 {
    get_optional_field(source, field_name)
        .map(|value| clean_float(&value, 0.0))
        .unwrap_or(0.0)
}

/// Parse a count field, defaulting to 0
pub fn parse_count<S: FieldSource + ?Sized>(source: &S, field_name: &str) -> u32 {
    get_optional_field(source, field_name)
        .map(|value| clean_count(&value, 0))
        .unwrap_or(0)
}

/// Parse a count field that may be left unlogged; absent columns and empty
/// cells are `None`
pub fn parse_optional_count<S: FieldSource + ?Sized>(source: &S, field_name: &str) -> Option<u32> {
    get_optional_field(source, field_name).map(|value| clean_count(&value, 0))
}

/// Parse a distance; zero, negative and empty all mean "not logged"
pub fn parse_distance<S: FieldSource + ?Sized>(source: &S, field_name: &str) -> Option<f64> {
    let distance = parse_hours(source, field_name);
    (distance > 0.0).then_some(distance)
}

/// Parse a yes/no flag cell (`x`, `true`, `yes`, `y`, `1` are true)
pub fn parse_flag<S: FieldSource + ?Sized>(source: &S, field_name: &str) -> bool {
    get_optional_field(source, field_name)
        .map(|value| is_truthy(&value))
        .unwrap_or(false)
}

pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "x" | "true" | "yes" | "y" | "1"
    )
}

// =============================================================================
// Dates and Times
// =============================================================================

/// Parse the required flight date (`YYYY-MM-DD`)
pub fn parse_required_date<S: FieldSource + ?Sized>(
    source: &S,
    field_name: &str,
) -> Result<NaiveDate> {
    let value = get_optional_field(source, field_name)
        .ok_or_else(|| Error::data_validation("Missing date"))?;

    NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|e| {
        Error::datetime_parsing(
            format!(
                "Invalid date format for {}: '{}' (expected 'YYYY-MM-DD')",
                field_name, value
            ),
            e,
        )
    })
}

/// Parse an optional clock time (`HH:MM`); unparseable values are dropped
pub fn parse_optional_clock_time<S: FieldSource + ?Sized>(
    source: &S,
    field_name: &str,
) -> Option<NaiveTime> {
    let value = get_optional_field(source, field_name)?;

    match NaiveTime::parse_from_str(&value, CLOCK_FORMAT) {
        Ok(time) => Some(time),
        Err(_) => {
            warn!("Ignoring unparseable {} value '{}'", field_name, value);
            None
        }
    }
}
