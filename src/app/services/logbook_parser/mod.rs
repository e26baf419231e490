//! Importer for ForeFlight logbook exports
//!
//! Turns a combined export (aircraft table + flights table) into typed
//! [`LogbookEntry`](crate::app::models::LogbookEntry) values in file order.
//!
//! ## Architecture
//!
//! - [`parser`] - Import orchestration and the all-or-nothing row loop
//! - [`sections`] - Splitting the export into its two tables
//! - [`column_mapping`] - Header analysis and required-column checks
//! - [`record_parser`] - Flight row parsing and pilot-role inference
//! - [`field_parsers`] - Lenient numeric cleaning and strict date parsing
//! - [`stats`] - Import statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logbook_processor::app::services::logbook_parser::LogbookImporter;
//! use logbook_processor::config::ImportConfig;
//!
//! # fn example() -> logbook_processor::Result<()> {
//! let importer = LogbookImporter::new(ImportConfig::default());
//! let result = importer.import_file(std::path::Path::new("logbook.csv"))?;
//!
//! println!("{}", result.stats.summary());
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod sections;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use field_parsers::{FieldSource, MappedRecord};
pub use parser::LogbookImporter;
pub use record_parser::{CellValue, RawRow, infer_pilot_role};
pub use sections::{ExportSections, SectionTable, split_sections};
pub use stats::{ImportResult, ImportStats};
