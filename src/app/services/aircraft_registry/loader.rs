//! Registry loading from the export's aircraft table

use super::AircraftRegistry;
use crate::app::models::{Aircraft, CategoryClass, GearType};
use crate::app::services::logbook_parser::field_parsers::{
    FieldSource, MappedRecord, get_optional_field, parse_flag, parse_optional_string,
};
use crate::app::services::logbook_parser::{ColumnMapping, SectionTable};
use crate::config::ImportConfig;
use crate::constants::aircraft_columns as col;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Statistics about loading the aircraft table
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoadStats {
    /// Data rows read from the table
    pub rows_read: usize,

    /// Distinct aircraft registered
    pub aircraft_loaded: usize,

    /// Rows repeating an already registered id
    pub duplicates_ignored: usize,

    /// Rows with an empty id
    pub blank_ids_skipped: usize,
}

impl LoadStats {
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} aircraft from {} rows ({} duplicates, {} without id)",
            self.aircraft_loaded, self.rows_read, self.duplicates_ignored, self.blank_ids_skipped
        )
    }
}

/// Parse one aircraft row; rows without an id yield `None`
///
/// Blank category/gear cells take the import defaults. The type code doubles
/// as the ICAO designator checked during validation.
pub fn parse_aircraft_record<S: FieldSource + ?Sized>(
    source: &S,
    config: &ImportConfig,
) -> Option<Aircraft> {
    let registration = get_optional_field(source, col::AIRCRAFT_ID)?;
    let type_code = parse_optional_string(source, col::TYPE_CODE);

    let category = get_optional_field(source, col::AIRCRAFT_CLASS)
        .map(|value| CategoryClass::parse(&value))
        .unwrap_or_else(|| CategoryClass::parse(&config.default_category_class));
    let gear = get_optional_field(source, col::GEAR_TYPE)
        .map(|value| GearType::parse(&value))
        .unwrap_or_else(|| GearType::parse(&config.default_gear_type));

    let mut aircraft = Aircraft::new(
        registration.into_owned(),
        type_code
            .clone()
            .unwrap_or_else(|| config.default_aircraft_type.clone()),
        category,
    )
    .with_gear(gear)
    .with_make_model(
        parse_optional_string(source, col::MAKE),
        parse_optional_string(source, col::MODEL),
    )
    .with_complex(parse_flag(source, col::COMPLEX))
    .with_high_performance(parse_flag(source, col::HIGH_PERFORMANCE));

    if let Some(code) = type_code {
        aircraft = aircraft.with_icao_type_code(code);
    }

    Some(aircraft)
}

impl AircraftRegistry {
    /// Load a registry from the aircraft table of an export
    pub fn load_from_section(
        section: &SectionTable,
        config: &ImportConfig,
    ) -> Result<(Self, LoadStats)> {
        let mapping = ColumnMapping::analyze(&section.name, &section.headers);
        mapping.require(col::REQUIRED)?;

        let rows: Vec<MappedRecord<'_>> = section
            .rows
            .iter()
            .map(|record| MappedRecord::new(record, &mapping))
            .collect();

        let loaded = Self::load_from_rows(&rows, config);
        info!("{}", loaded.1.summary());
        Ok(loaded)
    }

    /// Load a registry from aircraft rows
    pub fn load_from_rows<S: FieldSource>(rows: &[S], config: &ImportConfig) -> (Self, LoadStats) {
        let mut registry = Self::new(config);
        let mut stats = LoadStats::default();

        for row in rows {
            stats.rows_read += 1;

            match parse_aircraft_record(row, config) {
                Some(aircraft) => {
                    let registration = aircraft.registration.clone();
                    if registry.insert(aircraft) {
                        stats.aircraft_loaded += 1;
                    } else {
                        debug!("Ignoring repeated aircraft {}", registration);
                        stats.duplicates_ignored += 1;
                    }
                }
                None => stats.blank_ids_skipped += 1,
            }
        }

        (registry, stats)
    }
}
