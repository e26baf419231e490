//! Solo endorsement coverage checks
//!
//! A student's PIC time is only legal while an instructor endorsement is in
//! force. This module finds PIC flights flown outside every endorsement
//! window and groups them into contiguous gaps, and separately reports gaps
//! between the endorsements themselves.

use crate::app::models::{InstructorEndorsement, LogbookEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A PIC flight not covered by any endorsement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnendorsedFlight {
    pub date: NaiveDate,
    /// "KPAO → KSQL" style label
    pub route: String,
    pub pic_time: f64,
    pub aircraft_type: String,
}

/// Period without endorsement coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageGap {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Unendorsed PIC flights inside the gap; zero for gaps between endorsements
    pub flight_count: usize,
}

impl CoverageGap {
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Outcome of checking a logbook against its endorsements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EndorsementReport {
    /// In date order
    pub unendorsed_flights: Vec<UnendorsedFlight>,
    pub gaps: Vec<CoverageGap>,
    pub total_invalid: usize,
}

impl EndorsementReport {
    /// True when every PIC flight was endorsed
    pub fn is_compliant(&self) -> bool {
        self.total_invalid == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} unendorsed PIC flight(s) in {} gap(s)",
            self.total_invalid,
            self.gaps.len()
        )
    }
}

fn is_endorsed(date: NaiveDate, endorsements: &[InstructorEndorsement]) -> bool {
    endorsements.iter().any(|endorsement| endorsement.covers(date))
}

/// Where a gap opened by an unendorsed flight on `date` begins: the latest
/// expiration before that date, or the date itself when nothing had lapsed
fn gap_start(date: NaiveDate, endorsements: &[InstructorEndorsement]) -> NaiveDate {
    endorsements
        .iter()
        .map(|endorsement| endorsement.expiration_date)
        .filter(|expiration| *expiration < date)
        .max()
        .unwrap_or(date)
}

/// Where an open gap ends: the earliest start among endorsements covering
/// the first covered flight after it
fn gap_end(date: NaiveDate, endorsements: &[InstructorEndorsement]) -> NaiveDate {
    endorsements
        .iter()
        .filter(|endorsement| endorsement.covers(date))
        .map(|endorsement| endorsement.start_date)
        .min()
        .unwrap_or(date)
}

/// Check every PIC flight against the endorsement windows
///
/// Entries with no PIC time are ignored. Consecutive unendorsed flights share
/// one gap, which closes at the next covered flight or, while still open, at
/// the last entry's date.
pub fn check_endorsements<E: AsRef<LogbookEntry>>(
    entries: &[E],
    endorsements: &[InstructorEndorsement],
) -> EndorsementReport {
    let mut sorted: Vec<&LogbookEntry> = entries.iter().map(AsRef::as_ref).collect();
    sorted.sort_by_key(|entry| entry.date);

    let mut report = EndorsementReport::default();
    let mut open_gap: Option<CoverageGap> = None;

    for entry in sorted.iter().filter(|entry| entry.pic_time > 0.0) {
        if !is_endorsed(entry.date, endorsements) {
            debug!("Unendorsed PIC flight on {}", entry.date);
            report.unendorsed_flights.push(UnendorsedFlight {
                date: entry.date,
                route: entry.route_label(),
                pic_time: entry.pic_time,
                aircraft_type: entry.aircraft.type_code.clone(),
            });

            match open_gap.as_mut() {
                Some(gap) => gap.flight_count += 1,
                None => {
                    open_gap = Some(CoverageGap {
                        start_date: gap_start(entry.date, endorsements),
                        end_date: entry.date,
                        flight_count: 1,
                    });
                }
            }
        } else if let Some(mut gap) = open_gap.take() {
            gap.end_date = gap_end(entry.date, endorsements);
            report.gaps.push(gap);
        }
    }

    if let Some(mut gap) = open_gap {
        if let Some(last) = sorted.last() {
            gap.end_date = last.date;
        }
        report.gaps.push(gap);
    }

    report.total_invalid = report.unendorsed_flights.len();
    if report.is_compliant() {
        info!("All PIC flights covered by endorsements");
    } else {
        warn!("Endorsement check: {}", report.summary());
    }
    report
}

/// Gaps between consecutive endorsements, ordered by start date
///
/// Independent of any flights. An endorsement that outlasts the one after it
/// keeps the coverage going until its own expiration.
pub fn find_coverage_gaps(endorsements: &[InstructorEndorsement]) -> Vec<CoverageGap> {
    let mut sorted = endorsements.to_vec();
    sorted.sort_by_key(|endorsement| endorsement.start_date);

    let mut gaps = Vec::new();
    let mut covered_until: Option<NaiveDate> = None;

    for endorsement in sorted {
        if let Some(until) = covered_until {
            if until < endorsement.start_date {
                gaps.push(CoverageGap {
                    start_date: until,
                    end_date: endorsement.start_date,
                    flight_count: 0,
                });
            }
        }
        covered_until = Some(match covered_until {
            Some(until) => until.max(endorsement.expiration_date),
            None => endorsement.expiration_date,
        });
    }

    gaps
}
