//! Stage records produced after import: diagnostics, validated and aggregated entries

use super::entry::LogbookEntry;
use crate::app::services::entry_validator::EntryValidator;
use serde::{Deserialize, Serialize};

/// Separator between rule messages in an explanation string
pub const EXPLANATION_SEPARATOR: &str = "; ";

// =============================================================================
// Diagnostics
// =============================================================================

/// Outcome of running the consistency rules on one entry
///
/// Errors and warnings are separate channels; a warning never sets the error flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Blocking rule violations joined with "; ", `None` when clean
    pub error_explanation: Option<String>,

    /// Advisory notes joined with "; ", `None` when there are none
    pub warning_explanation: Option<String>,
}

impl Diagnostics {
    pub(crate) fn from_messages(errors: &[String], warnings: &[String]) -> Self {
        let join = |messages: &[String]| {
            (!messages.is_empty()).then(|| messages.join(EXPLANATION_SEPARATOR))
        };
        Self {
            error_explanation: join(errors),
            warning_explanation: join(warnings),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.error_explanation.is_some()
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_explanation.is_some()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Individual error messages
    pub fn errors(&self) -> Vec<&str> {
        split(self.error_explanation.as_deref())
    }

    /// Individual warning messages
    pub fn warnings(&self) -> Vec<&str> {
        split(self.warning_explanation.as_deref())
    }
}

fn split(explanation: Option<&str>) -> Vec<&str> {
    explanation
        .map(|text| text.split(EXPLANATION_SEPARATOR).collect())
        .unwrap_or_default()
}

// =============================================================================
// Validated Entry
// =============================================================================

/// An entry that has been through [`EntryValidator`]
///
/// The entry carried here reflects the validator's auto-fill (PIC time for
/// PIC flights logged without it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedEntry {
    entry: LogbookEntry,
    diagnostics: Diagnostics,
}

impl ValidatedEntry {
    pub(crate) fn new(entry: LogbookEntry, diagnostics: Diagnostics) -> Self {
        Self { entry, diagnostics }
    }

    pub fn entry(&self) -> &LogbookEntry {
        &self.entry
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.has_warnings()
    }

    /// Run the rules again on the (already auto-filled) entry
    pub fn revalidate(&self, validator: &EntryValidator) -> ValidatedEntry {
        validator.validate(self.entry.clone())
    }

    pub fn into_entry(self) -> LogbookEntry {
        self.entry
    }
}

impl AsRef<LogbookEntry> for ValidatedEntry {
    fn as_ref(&self) -> &LogbookEntry {
        &self.entry
    }
}

// =============================================================================
// Running Totals
// =============================================================================

/// Cumulative flight-time counters as of (and including) one entry
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RunningTotals {
    pub total_time: f64,
    pub ground_training: f64,
    pub asel_time: f64,
    pub day_time: f64,
    pub night_time: f64,
    /// Actual plus simulated instrument
    pub instrument_time: f64,
    pub dual_received: f64,
    pub pic_time: f64,
    pub cross_country: f64,
}

impl RunningTotals {
    /// Add one entry's contribution to every counter
    pub(crate) fn add(&mut self, entry: &LogbookEntry) {
        self.total_time += entry.total_time;
        self.ground_training += entry.ground_training;
        if entry.aircraft.category_class.is_asel() {
            self.asel_time += entry.total_time;
        }
        self.day_time += entry.conditions.day;
        self.night_time += entry.conditions.night;
        self.instrument_time += entry.conditions.total_instrument();
        self.dual_received += entry.dual_received;
        self.pic_time += entry.pic_time;
        self.cross_country += entry.conditions.cross_country;
    }

    /// Copy with every counter rounded to one decimal place
    pub fn rounded(&self) -> Self {
        Self {
            total_time: round_tenth(self.total_time),
            ground_training: round_tenth(self.ground_training),
            asel_time: round_tenth(self.asel_time),
            day_time: round_tenth(self.day_time),
            night_time: round_tenth(self.night_time),
            instrument_time: round_tenth(self.instrument_time),
            dual_received: round_tenth(self.dual_received),
            pic_time: round_tenth(self.pic_time),
            cross_country: round_tenth(self.cross_country),
        }
    }

    /// Counters in a fixed order, for monotonicity checks and display
    pub fn values(&self) -> [(&'static str, f64); 9] {
        [
            ("total_time", self.total_time),
            ("ground_training", self.ground_training),
            ("asel_time", self.asel_time),
            ("day_time", self.day_time),
            ("night_time", self.night_time),
            ("instrument_time", self.instrument_time),
            ("dual_received", self.dual_received),
            ("pic_time", self.pic_time),
            ("cross_country", self.cross_country),
        ]
    }
}

pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// =============================================================================
// Aggregated Entry
// =============================================================================

/// A validated entry with its running-totals snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    validated: ValidatedEntry,
    running_totals: RunningTotals,
}

impl AggregatedEntry {
    pub(crate) fn new(validated: ValidatedEntry, running_totals: RunningTotals) -> Self {
        Self {
            validated,
            running_totals,
        }
    }

    pub fn entry(&self) -> &LogbookEntry {
        self.validated.entry()
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        self.validated.diagnostics()
    }

    pub fn running_totals(&self) -> &RunningTotals {
        &self.running_totals
    }

    pub fn has_errors(&self) -> bool {
        self.validated.has_errors()
    }

    pub fn has_warnings(&self) -> bool {
        self.validated.has_warnings()
    }

    pub fn validated(&self) -> &ValidatedEntry {
        &self.validated
    }
}

impl AsRef<LogbookEntry> for AggregatedEntry {
    fn as_ref(&self) -> &LogbookEntry {
        self.validated.entry()
    }
}

impl AsRef<LogbookEntry> for LogbookEntry {
    fn as_ref(&self) -> &LogbookEntry {
        self
    }
}
