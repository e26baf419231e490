//! Splitting a combined export into its aircraft and flights tables
//!
//! The export is one CSV stream holding a banner line, an aircraft table and a
//! flights table. Each table starts with a marker record (a record whose first
//! non-empty cell contains the marker text), followed by a header record and
//! data records. Records made only of empty cells separate the tables and are
//! skipped. Reading through the `csv` crate keeps quoted multi-line remarks
//! intact.

use crate::config::ImportConfig;
use crate::constants::FOREFLIGHT_BANNER;
use crate::{Error, Result};
use csv::StringRecord;
use std::io::Read;
use tracing::debug;

/// One table of the export
#[derive(Debug, Clone)]
pub struct SectionTable {
    /// Marker text that introduced the table
    pub name: String,

    /// 1-based line of the marker record
    pub marker_line: u64,

    /// Header record
    pub headers: StringRecord,

    /// Non-blank data records in file order
    pub rows: Vec<StringRecord>,
}

impl SectionTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Both tables of an export
#[derive(Debug, Clone)]
pub struct ExportSections {
    pub aircraft: SectionTable,
    pub flights: SectionTable,

    /// Whether the first record carries the ForeFlight import banner
    pub has_banner: bool,

    /// Records read, blank ones included
    pub total_records: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Table {
    Aircraft,
    Flights,
}

#[derive(Debug)]
struct PendingTable {
    name: String,
    marker_line: u64,
    headers: Option<StringRecord>,
    rows: Vec<StringRecord>,
}

impl PendingTable {
    fn new(name: &str, marker_line: u64) -> Self {
        Self {
            name: name.to_string(),
            marker_line,
            headers: None,
            rows: Vec::new(),
        }
    }

    fn finish(self) -> Result<SectionTable> {
        let headers = self
            .headers
            .ok_or_else(|| Error::missing_header(&self.name))?;
        Ok(SectionTable {
            name: self.name,
            marker_line: self.marker_line,
            headers,
            rows: self.rows,
        })
    }
}

/// Whether every cell of the record is empty or whitespace
pub fn is_blank_record(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn first_cell(record: &StringRecord) -> Option<&str> {
    record.iter().map(str::trim).find(|field| !field.is_empty())
}

fn is_marker(record: &StringRecord, marker: &str) -> bool {
    first_cell(record).is_some_and(|cell| cell.contains(marker))
}

/// Split an export read from `reader` into its two tables
///
/// `source` names the input in error messages.
pub fn split_sections<R: Read>(
    reader: R,
    config: &ImportConfig,
    source: &str,
) -> Result<ExportSections> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let aircraft_marker = config.aircraft_section_marker.as_str();
    let flights_marker = config.flights_section_marker.as_str();

    let mut aircraft: Option<PendingTable> = None;
    let mut flights: Option<PendingTable> = None;
    let mut current: Option<Table> = None;
    let mut has_banner = false;
    let mut total_records = 0;

    for result in csv_reader.records() {
        let record = result.map_err(|e| {
            Error::csv_parsing(source, format!("Failed to read record: {}", e), Some(e))
        })?;
        total_records += 1;

        if total_records == 1 {
            has_banner = first_cell(&record).is_some_and(|cell| cell.contains(FOREFLIGHT_BANNER));
        }

        if is_blank_record(&record) {
            continue;
        }

        let line = record.position().map_or(total_records as u64, |p| p.line());

        if flights.is_none() && is_marker(&record, flights_marker) {
            debug!("Found {} at line {}", flights_marker, line);
            flights = Some(PendingTable::new(flights_marker, line));
            current = Some(Table::Flights);
            continue;
        }

        if aircraft.is_none() && flights.is_none() && is_marker(&record, aircraft_marker) {
            debug!("Found {} at line {}", aircraft_marker, line);
            aircraft = Some(PendingTable::new(aircraft_marker, line));
            current = Some(Table::Aircraft);
            continue;
        }

        let table = match current {
            Some(Table::Aircraft) => aircraft.as_mut(),
            Some(Table::Flights) => flights.as_mut(),
            None => None,
        };

        // Records before the first marker (banner and notes) belong to no table
        if let Some(table) = table {
            if table.headers.is_none() {
                table.headers = Some(record);
            } else {
                table.rows.push(record);
            }
        }
    }

    let aircraft = aircraft.ok_or_else(|| Error::missing_section(aircraft_marker))?;
    let flights = flights.ok_or_else(|| Error::missing_section(flights_marker))?;

    Ok(ExportSections {
        aircraft: aircraft.finish()?,
        flights: flights.finish()?,
        has_banner,
        total_records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "ForeFlight Logbook Import,This row is required,,\n\
        ,,,\n\
        Aircraft Table,,,\n\
        AircraftID,TypeCode,Make,Model\n\
        N125CM,CH7A,Bellanca,7ECA\n\
        ,,,\n\
        Flights Table,,,\n\
        Date,AircraftID,TotalTime,PilotComments\n\
        2023-01-01,N125CM,1.0,\"Pattern work\n\
        second line\"\n\
        2023-01-02,N125CM,1.5,\n";

    #[test]
    fn test_split_sections() {
        let sections =
            split_sections(EXPORT.as_bytes(), &ImportConfig::default(), "test.csv").unwrap();

        assert!(sections.has_banner);
        assert_eq!(sections.aircraft.marker_line, 3);
        assert_eq!(sections.aircraft.row_count(), 1);
        assert_eq!(sections.aircraft.headers.get(0), Some("AircraftID"));
        assert_eq!(sections.flights.marker_line, 7);
        assert_eq!(sections.flights.row_count(), 2);
        assert_eq!(
            sections.flights.rows[0].get(3),
            Some("Pattern work\nsecond line")
        );
    }

    #[test]
    fn test_missing_flights_marker() {
        let content = "Aircraft Table\nAircraftID,TypeCode\nN1,C172\n";
        let error =
            split_sections(content.as_bytes(), &ImportConfig::default(), "test.csv").unwrap_err();
        assert!(matches!(error, Error::MissingSection { .. }));
        assert_eq!(error.to_string(), "Could not find Flights Table section");
    }

    #[test]
    fn test_missing_aircraft_marker() {
        let content = "Flights Table\nDate,AircraftID,TotalTime\n";
        let error =
            split_sections(content.as_bytes(), &ImportConfig::default(), "test.csv").unwrap_err();
        assert_eq!(error.to_string(), "Could not find Aircraft Table section");
    }

    #[test]
    fn test_missing_header_after_marker() {
        let content = "Aircraft Table\nAircraftID\nN1\nFlights Table,,\n,,\n";
        let error =
            split_sections(content.as_bytes(), &ImportConfig::default(), "test.csv").unwrap_err();
        assert!(matches!(error, Error::MissingHeader { .. }));
    }

    #[test]
    fn test_banner_absent() {
        let content = "Aircraft Table\nAircraftID\nFlights Table\nDate,AircraftID,TotalTime\n";
        let sections =
            split_sections(content.as_bytes(), &ImportConfig::default(), "test.csv").unwrap();
        assert!(!sections.has_banner);
        assert_eq!(sections.aircraft.row_count(), 0);
        assert_eq!(sections.flights.row_count(), 0);
    }
}
