//! Core importer implementation
//!
//! Handles file reading, section splitting and the per-row loop. The import is
//! all-or-nothing: the first row that cannot become an entry fails the whole
//! import with an error naming its 1-based index.

use chrono::{NaiveDate, Utc};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

use super::column_mapping::ColumnMapping;
use super::field_parsers::{FieldSource, MappedRecord};
use super::record_parser::parse_flight_record;
use super::sections::{ExportSections, split_sections};
use super::stats::{ImportResult, ImportStats};
use crate::app::models::LogbookEntry;
use crate::app::services::aircraft_registry::AircraftRegistry;
use crate::config::ImportConfig;
use crate::constants::flight_columns;
use crate::{Error, Result};

/// Importer for ForeFlight logbook exports
#[derive(Debug, Clone, Default)]
pub struct LogbookImporter {
    config: ImportConfig,
    today: Option<NaiveDate>,
}

impl LogbookImporter {
    /// Create a new importer with the given settings
    pub fn new(config: ImportConfig) -> Self {
        Self {
            config,
            today: None,
        }
    }

    /// Builder pattern: fix the date used for the "not in the future" check
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Import an export file
    pub fn import_file(&self, file_path: &Path) -> Result<ImportResult> {
        info!("Importing logbook export: {}", file_path.display());

        let file = File::open(file_path).map_err(|e| {
            Error::io(format!("Failed to open file {}", file_path.display()), e)
        })?;

        self.import_reader(BufReader::new(file), &file_path.display().to_string())
    }

    /// Import an export held in memory
    pub fn import_str(&self, content: &str) -> Result<ImportResult> {
        self.import_reader(content.as_bytes(), "<memory>")
    }

    /// Import an export from any reader; `source` names it in error messages
    pub fn import_reader<R: Read>(&self, reader: R, source: &str) -> Result<ImportResult> {
        let sections = split_sections(reader, &self.config, source)?;
        self.import_sections(&sections)
    }

    /// Build entries from an already split export
    pub fn import_sections(&self, sections: &ExportSections) -> Result<ImportResult> {
        let (aircraft, load_stats) =
            AircraftRegistry::load_from_section(&sections.aircraft, &self.config)?;

        let mapping = ColumnMapping::analyze(&sections.flights.name, &sections.flights.headers);
        mapping.require(flight_columns::REQUIRED)?;
        debug!(
            "{} columns in {}",
            mapping.column_count(),
            sections.flights.name
        );

        let rows: Vec<MappedRecord<'_>> = sections
            .flights
            .rows
            .iter()
            .map(|record| MappedRecord::new(record, &mapping))
            .collect();

        let mut result = self.parse_rows(&rows, aircraft)?;
        result.stats.aircraft_rows = load_stats.rows_read;
        Ok(result)
    }

    /// Turn flight rows into entries using `aircraft` to resolve tail numbers
    ///
    /// Entries keep the input order.
    pub fn parse_rows<S: FieldSource>(
        &self,
        rows: &[S],
        aircraft: AircraftRegistry,
    ) -> Result<ImportResult> {
        let today = self.today();
        let mut stats = ImportStats::new();
        stats.aircraft_loaded = aircraft.len();
        stats.flight_rows = rows.len();

        let entries = rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                parse_flight_record(row, &aircraft, &mut stats, today)
                    .map_err(|e| Error::row_import(index + 1, flatten_message(&e)))
            })
            .collect::<Result<Vec<LogbookEntry>>>()?;

        if entries.is_empty() && self.config.require_entries {
            return Err(Error::EmptyLogbook);
        }

        stats.entries_imported = entries.len();
        info!("{}", stats.summary());

        Ok(ImportResult {
            entries,
            aircraft,
            stats,
        })
    }
}

/// Error text without the variant prefix, for embedding in a row error
fn flatten_message(error: &Error) -> String {
    match error {
        Error::DataValidation { message }
        | Error::Configuration { message }
        | Error::DateTimeParsing { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
