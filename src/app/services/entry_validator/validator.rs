//! Consistency rules for a single logbook entry
//!
//! Each rule appends a message; nothing here fails or aborts. Ground-only
//! entries (no flight time) are exempt from every rule.

use std::sync::Arc;
use tracing::debug;

use super::designators::{IcaoDesignatorTable, TypeDesignatorLookup};
use super::route_evidence::{entry_distance, has_route_evidence};
use crate::app::models::{Diagnostics, LogbookEntry, PilotRole, ValidatedEntry};
use crate::config::ValidationConfig;

/// Slack for comparisons of decimal hour values
const EPSILON: f64 = 1e-9;

/// Runs the consistency rules and attaches diagnostics to each entry
#[derive(Debug, Clone)]
pub struct EntryValidator {
    config: ValidationConfig,
    designators: Arc<dyn TypeDesignatorLookup>,
}

/// Messages collected while checking one entry
#[derive(Debug, Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }
}

fn exceeds(value: f64, limit: f64) -> bool {
    value > limit + EPSILON
}

fn differs(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() > tolerance + EPSILON
}

impl EntryValidator {
    /// Create a validator backed by the built-in ICAO designator table
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            designators: Arc::new(IcaoDesignatorTable::new()),
        }
    }

    /// Builder pattern: use another designator lookup
    pub fn with_designator_lookup(mut self, lookup: Arc<dyn TypeDesignatorLookup>) -> Self {
        self.designators = lookup;
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one entry
    ///
    /// A PIC flight logged without PIC time gets its total time as PIC time
    /// before the time-accounting rule runs; the returned entry carries that
    /// fill. Validating the result again yields the same diagnostics.
    pub fn validate(&self, mut entry: LogbookEntry) -> ValidatedEntry {
        let mut findings = Findings::default();

        if entry.is_flight() {
            self.check_airports(&entry, &mut findings);
            self.check_registration(&entry, &mut findings);
            self.check_type_code(&entry, &mut findings);
            self.check_role(&entry, &mut findings);
            self.check_time_sums(&entry, &mut findings);

            if entry.pilot_role == PilotRole::Pic && entry.pic_time == 0.0 {
                debug!("Filling PIC time {} for {} PIC flight", entry.total_time, entry.date);
                entry.pic_time = entry.total_time;
            }

            self.check_time_accounting(&entry, &mut findings);
            self.check_role_times(&entry, &mut findings);
            self.check_cross_country(&entry, &mut findings);
            self.check_landings(&entry, &mut findings);
            self.check_solo(&entry, &mut findings);
        }

        if !findings.errors.is_empty() {
            debug!(
                "Entry {} {} flagged: {} issue(s)",
                entry.date,
                entry.route_label(),
                findings.errors.len()
            );
        }

        let diagnostics = Diagnostics::from_messages(&findings.errors, &findings.warnings);
        ValidatedEntry::new(entry, diagnostics)
    }

    /// Validate every entry independently, keeping their order
    pub fn validate_all(&self, entries: Vec<LogbookEntry>) -> Vec<ValidatedEntry> {
        entries.into_iter().map(|entry| self.validate(entry)).collect()
    }

    fn check_airports(&self, entry: &LogbookEntry, findings: &mut Findings) {
        if entry.departure_id().is_none() {
            findings.error("Missing departure airport");
        }
        if entry.destination_id().is_none() {
            findings.error("Missing destination airport");
        }
    }

    fn check_registration(&self, entry: &LogbookEntry, findings: &mut Findings) {
        let registration = entry.aircraft.registration.trim();

        if registration.is_empty() {
            findings.error("Missing aircraft registration");
        } else if !self
            .config
            .registration_prefixes
            .iter()
            .any(|prefix| registration.starts_with(prefix.as_str()))
        {
            findings.error(format!(
                "Invalid aircraft registration format: {}",
                registration
            ));
        }
    }

    fn check_type_code(&self, entry: &LogbookEntry, findings: &mut Findings) {
        if let Some(code) = entry.aircraft.icao_type_code.as_deref() {
            if !code.trim().is_empty() && !self.designators.is_valid(code) {
                findings.error(self.designators.error_message(code));
            }
        }
    }

    fn check_role(&self, entry: &LogbookEntry, findings: &mut Findings) {
        if !entry.pilot_role.is_recognized() {
            findings.error(format!(
                "Invalid pilot role (must be one of: {})",
                PilotRole::RECOGNIZED.join(", ")
            ));
        }
    }

    fn check_time_sums(&self, entry: &LogbookEntry, findings: &mut Findings) {
        let total = entry.total_time;
        let conditions = &entry.conditions;

        if conditions.day > 0.0 && conditions.night > 0.0 {
            let sum = conditions.day + conditions.night;
            if differs(sum, total, self.config.time_tolerance_hours) {
                findings.error(format!(
                    "Day ({:.1}) + night ({:.1}) time ({:.1}) does not match total time ({:.1})",
                    conditions.day, conditions.night, sum, total
                ));
            }
        }

        let instrument = conditions.total_instrument();
        if exceeds(instrument, total) {
            findings.error(format!(
                "Total instrument time ({:.1}) exceeds flight time ({:.1})",
                instrument, total
            ));
        }

        if exceeds(entry.dual_received, total) {
            findings.error(format!(
                "Dual received time ({:.1}) exceeds flight time ({:.1})",
                entry.dual_received, total
            ));
        }

        if exceeds(entry.solo_time, total) {
            findings.error(format!(
                "Solo time ({:.1}) exceeds flight time ({:.1})",
                entry.solo_time, total
            ));
        }
    }

    fn check_time_accounting(&self, entry: &LogbookEntry, findings: &mut Findings) {
        let accounted = entry.dual_received + entry.pic_time;
        if differs(accounted, entry.total_time, self.config.time_tolerance_hours) {
            findings.error(format!(
                "Total time ({:.1}) should equal sum of PIC time ({:.1}) and dual received time ({:.1})",
                entry.total_time, entry.pic_time, entry.dual_received
            ));
        }
    }

    fn check_role_times(&self, entry: &LogbookEntry, findings: &mut Findings) {
        match entry.pilot_role {
            PilotRole::Student => {
                if entry.pic_time > 0.0 {
                    findings.error("Student pilot cannot log PIC time");
                }
                if entry.dual_received == 0.0 {
                    findings.error("Student pilot flights should typically log dual received time");
                }
            }
            PilotRole::Pic if entry.dual_received > 0.0 => {
                findings.error("PIC should not log dual received time");
            }
            _ => {}
        }
    }

    fn check_cross_country(&self, entry: &LogbookEntry, findings: &mut Findings) {
        if entry.conditions.cross_country <= 0.0 {
            return;
        }

        if let (Some(departure), Some(destination)) = (entry.departure_id(), entry.destination_id())
        {
            if departure.eq_ignore_ascii_case(destination)
                && !has_route_evidence(entry, self.config.route_evidence_distance_nm)
            {
                findings.error(format!(
                    "Cross-country time logged for flight with same departure and destination ({}) without route evidence",
                    departure
                ));
            }
        }

        if let Some(distance) = entry_distance(entry) {
            let threshold = self.config.cross_country_warning_distance_nm;
            if distance < threshold {
                findings.warning(format!(
                    "Cross-country flight under {:.0}nm ({:.0}nm) may not count toward private/instrument/commercial certificate requirements",
                    threshold, distance
                ));
            }
        }
    }

    fn check_landings(&self, entry: &LogbookEntry, findings: &mut Findings) {
        let landings = entry.total_landings();
        let per_hour = landings as f64 / entry.total_time;
        if exceeds(per_hour, self.config.max_landings_per_hour) {
            findings.error(format!(
                "Excessive landings for flight time ({} landings in {:.1} hours)",
                landings, entry.total_time
            ));
        }

        if entry.landings_night > 0 && entry.conditions.night == 0.0 {
            findings.error("Night landings logged without night flight time");
        }
    }

    fn check_solo(&self, entry: &LogbookEntry, findings: &mut Findings) {
        if entry.solo_time <= 0.0 {
            return;
        }
        if entry.dual_received > 0.0 {
            findings.error("Solo time cannot be logged with dual received time");
        }
        if !matches!(entry.pilot_role, PilotRole::Pic | PilotRole::Student) {
            findings.error("Solo time can only be logged by PIC or student pilots");
        }
    }
}

impl Default for EntryValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}
