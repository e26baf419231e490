//! Main logbook processor implementation and pipeline orchestration
//!
//! Coordinates import, validation, running totals and statistics for one
//! export. Each call owns its entries and aircraft registry; nothing is
//! shared between runs.

use chrono::{NaiveDate, Utc};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use super::stats::{ProcessedLogbook, ProcessingSummary};
use crate::Result;
use crate::app::models::{InstructorEndorsement, LogbookEntry};
use crate::app::services::aircraft_registry::AircraftRegistry;
use crate::app::services::endorsement_checker::{EndorsementReport, check_endorsements};
use crate::app::services::entry_validator::{EntryValidator, TypeDesignatorLookup};
use crate::app::services::logbook_parser::{FieldSource, ImportResult, LogbookImporter};
use crate::app::services::running_totals::accumulate;
use crate::app::services::statistics::{WindowedStatistics, aircraft_usage};
use crate::config::LogbookConfig;

/// Full-pipeline processor for logbook exports
///
/// # Example
///
/// ```rust,no_run
/// use std::path::Path;
/// use logbook_processor::{LogbookConfig, LogbookProcessor};
///
/// # fn example() -> logbook_processor::Result<()> {
/// let processor = LogbookProcessor::new(LogbookConfig::default())?;
/// let logbook = processor.process_file(Path::new("logbook.csv"))?;
///
/// println!("{}", logbook.summary());
/// for entry in logbook.flagged_entries() {
///     println!("{}: {:?}", entry.entry().date, entry.diagnostics().error_explanation);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct LogbookProcessor {
    config: LogbookConfig,
    importer: LogbookImporter,
    validator: EntryValidator,
    today: Option<NaiveDate>,
}

impl LogbookProcessor {
    /// Create a processor, rejecting unusable configuration
    pub fn new(config: LogbookConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            importer: LogbookImporter::new(config.import.clone()),
            validator: EntryValidator::new(config.validation.clone()),
            config,
            today: None,
        })
    }

    /// Builder pattern: fix "today" for the future-date check and the statistics windows
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.importer = self.importer.with_today(today);
        self.today = Some(today);
        self
    }

    /// Builder pattern: use another ICAO designator lookup
    pub fn with_designator_lookup(mut self, lookup: Arc<dyn TypeDesignatorLookup>) -> Self {
        self.validator = self.validator.with_designator_lookup(lookup);
        self
    }

    pub fn config(&self) -> &LogbookConfig {
        &self.config
    }

    pub fn validator(&self) -> &EntryValidator {
        &self.validator
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Process an export file
    ///
    /// Fails only on file-level problems; rule violations are reported on the
    /// entries.
    pub fn process_file(&self, file_path: &Path) -> Result<ProcessedLogbook> {
        let imported = self.importer.import_file(file_path)?;
        Ok(self.process_import(imported))
    }

    /// Process an export held in memory
    pub fn process_str(&self, content: &str) -> Result<ProcessedLogbook> {
        let imported = self.importer.import_str(content)?;
        Ok(self.process_import(imported))
    }

    /// Process flight rows that were split from the export elsewhere
    pub fn process_rows<S: FieldSource>(
        &self,
        rows: &[S],
        aircraft: AircraftRegistry,
    ) -> Result<ProcessedLogbook> {
        let imported = self.importer.parse_rows(rows, aircraft)?;
        Ok(self.process_import(imported))
    }

    fn process_import(&self, imported: ImportResult) -> ProcessedLogbook {
        let ImportResult {
            entries,
            aircraft,
            stats,
        } = imported;
        self.process_entries(entries, aircraft, stats.unknown_aircraft_defaulted)
    }

    /// Run validation, running totals and statistics over imported entries
    pub fn process_entries(
        &self,
        entries: Vec<LogbookEntry>,
        aircraft: AircraftRegistry,
        unknown_aircraft_defaulted: usize,
    ) -> ProcessedLogbook {
        info!(
            "Starting logbook processing pipeline for {} entries",
            entries.len()
        );

        let validated = self.validator.validate_all(entries);
        debug!("Validation complete");

        let entries = accumulate(validated);

        let today = self.today();
        let statistics = WindowedStatistics::compute(&entries, today);
        let aircraft_usage = aircraft_usage(&entries);
        debug!("All-time statistics: {}", statistics.all_time.summary());

        let summary = ProcessingSummary::from_entries(&entries, unknown_aircraft_defaulted);
        info!("{}", summary.summary());

        ProcessedLogbook {
            entries,
            aircraft,
            statistics,
            aircraft_usage,
            summary,
        }
    }

    /// Check a processed logbook against endorsements starting on `start_dates`
    ///
    /// Each endorsement runs for the configured validity period.
    pub fn check_endorsements(
        &self,
        logbook: &ProcessedLogbook,
        start_dates: &[NaiveDate],
    ) -> EndorsementReport {
        let endorsements: Vec<InstructorEndorsement> = start_dates
            .iter()
            .map(|start| self.config.endorsement.endorsement_from(*start))
            .collect();
        check_endorsements(&logbook.entries, &endorsements)
    }
}
