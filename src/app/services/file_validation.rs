//! Pre-import validation of an export file
//!
//! Walks an export through the same stages an import uses and reports how far
//! it got instead of failing. Callers show the report before importing so a
//! malformed upload can be explained to the user.

use std::fs;
use std::path::Path;

use crate::app::services::logbook_parser::{ExportSections, LogbookImporter, SectionTable, split_sections};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// How far validation progressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationStage {
    /// Reading the file from disk
    FileRead,
    /// Locating section markers and headers
    Structure,
    /// Building entries from the rows
    Parsing,
    /// Every stage passed
    Complete,
}

impl ValidationStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FileRead => "file_read",
            Self::Structure => "structure",
            Self::Parsing => "parsing",
            Self::Complete => "complete",
        }
    }
}

/// Location and shape of one table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDetails {
    /// 1-based line of the marker
    pub marker_line: u64,
    pub columns: Vec<String>,
    pub rows: usize,
}

impl SectionDetails {
    fn from_table(table: &SectionTable) -> Self {
        Self {
            marker_line: table.marker_line,
            columns: table
                .headers
                .iter()
                .map(str::trim)
                .filter(|column| !column.is_empty())
                .map(str::to_string)
                .collect(),
            rows: table.row_count(),
        }
    }
}

/// Facts gathered along the way, filled in as far as validation got
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationDetails {
    pub total_lines: usize,
    pub empty_lines: usize,
    pub has_banner: bool,
    pub aircraft_table: Option<SectionDetails>,
    pub flights_table: Option<SectionDetails>,
    /// Entries built by the import
    pub entry_count: Option<usize>,
}

/// Validation outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileValidationReport {
    pub success: bool,
    /// Stage reached; the failing stage when `success` is false
    pub stage: ValidationStage,
    pub error: Option<String>,
    pub warnings: Vec<String>,
    pub details: ValidationDetails,
}

impl FileValidationReport {
    fn new() -> Self {
        Self {
            success: false,
            stage: ValidationStage::FileRead,
            error: None,
            warnings: Vec::new(),
            details: ValidationDetails::default(),
        }
    }

    fn fail(mut self, stage: ValidationStage, error: impl Into<String>) -> Self {
        let error = error.into();
        warn!("Export validation failed at {} stage: {}", stage.as_str(), error);
        self.stage = stage;
        self.error = Some(error);
        self
    }

    pub fn summary(&self) -> String {
        match &self.error {
            Some(error) => format!("Failed at {} stage: {}", self.stage.as_str(), error),
            None => format!(
                "Valid export: {} entries, {} warning(s)",
                self.details.entry_count.unwrap_or(0),
                self.warnings.len()
            ),
        }
    }
}

/// Validate an export file with the default import settings
pub fn validate_export(path: &Path) -> FileValidationReport {
    validate_export_with(path, &LogbookImporter::default())
}

/// Validate an export file using `importer`'s settings
pub fn validate_export_with(path: &Path, importer: &LogbookImporter) -> FileValidationReport {
    info!("Validating export: {}", path.display());

    match fs::read(path) {
        Ok(bytes) => validate_content(&String::from_utf8_lossy(&bytes), importer),
        Err(e) => FileValidationReport::new().fail(
            ValidationStage::FileRead,
            format!("Failed to read {}: {}", path.display(), e),
        ),
    }
}

/// Validate export content already in memory
pub fn validate_content(content: &str, importer: &LogbookImporter) -> FileValidationReport {
    let mut report = FileValidationReport::new();

    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    report.details.total_lines = content.lines().count();
    report.details.empty_lines = content
        .lines()
        .filter(|line| line.trim().trim_matches(',').is_empty())
        .count();

    let sections: ExportSections =
        match split_sections(content.as_bytes(), importer.config(), "<export>") {
            Ok(sections) => sections,
            Err(e) => return report.fail(ValidationStage::Structure, e.to_string()),
        };

    report.details.has_banner = sections.has_banner;
    if !sections.has_banner {
        report
            .warnings
            .push("ForeFlight import banner line not found on the first line".to_string());
    }
    report.details.aircraft_table = Some(SectionDetails::from_table(&sections.aircraft));
    report.details.flights_table = Some(SectionDetails::from_table(&sections.flights));

    let imported = match importer.import_sections(&sections) {
        Ok(imported) => imported,
        Err(e) => return report.fail(ValidationStage::Parsing, e.to_string()),
    };

    if !imported.stats.unknown_aircraft_ids.is_empty() {
        report.warnings.push(format!(
            "Aircraft not in the aircraft table, defaults used: {}",
            imported.stats.unknown_aircraft_ids.join(", ")
        ));
    }

    report.details.entry_count = Some(imported.entries.len());
    report.stage = ValidationStage::Complete;
    report.success = true;
    info!("{}", report.summary());
    report
}
