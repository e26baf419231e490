//! Flight-time statistics reduction
//!
//! A pure fold over entries: no ordering requirement, never fails, and an
//! empty input yields every field at zero.

use crate::app::models::{CategoryClass, GearType, LogbookEntry, pipeline::round_tenth};
use serde::{Deserialize, Serialize};

/// Totals over a set of logbook entries
///
/// Every field is always present; `Default` is the all-zero value reported
/// for an empty set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightStatistics {
    /// Entries considered, ground-only entries included
    pub entries: usize,
    /// Entries with flight time
    pub flights: usize,

    pub total_time: f64,

    // Gear
    pub tailwheel_time: f64,
    pub tricycle_time: f64,

    // Category and class
    pub asel_time: f64,
    pub amel_time: f64,
    pub ases_time: f64,
    pub ames_time: f64,
    pub helicopter_time: f64,
    pub gyroplane_time: f64,
    pub glider_time: f64,

    // Aircraft endorsements
    pub complex_time: f64,
    pub high_performance_time: f64,

    // Conditions
    pub day_time: f64,
    pub night_time: f64,
    pub actual_instrument: f64,
    pub simulated_instrument: f64,
    /// Actual plus simulated instrument
    pub instrument_time: f64,
    pub cross_country: f64,

    // Role times
    pub pic_time: f64,
    pub sic_time: f64,
    pub solo_time: f64,
    pub dual_received: f64,
    pub dual_given: f64,
    pub ground_training: f64,

    pub day_landings: u32,
    pub night_landings: u32,
    pub total_landings: u32,
    /// Logged takeoffs, falling back to full-stop landings per entry
    pub total_takeoffs: u32,
}

impl FlightStatistics {
    /// Create zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry's contribution
    pub fn add(&mut self, entry: &LogbookEntry) {
        let hours = entry.total_time;
        let aircraft = &entry.aircraft;
        let conditions = &entry.conditions;

        self.entries += 1;
        if entry.is_flight() {
            self.flights += 1;
        }
        self.total_time += hours;

        match aircraft.gear_type {
            GearType::Tailwheel => self.tailwheel_time += hours,
            GearType::Tricycle => self.tricycle_time += hours,
            GearType::Other(_) => {}
        }

        match aircraft.category_class {
            CategoryClass::AirplaneSingleEngineLand => self.asel_time += hours,
            CategoryClass::AirplaneMultiEngineLand => self.amel_time += hours,
            CategoryClass::AirplaneSingleEngineSea => self.ases_time += hours,
            CategoryClass::AirplaneMultiEngineSea => self.ames_time += hours,
            CategoryClass::Helicopter => self.helicopter_time += hours,
            CategoryClass::Gyroplane => self.gyroplane_time += hours,
            CategoryClass::Glider => self.glider_time += hours,
            CategoryClass::Other(_) => {}
        }

        if aircraft.complex {
            self.complex_time += hours;
        }
        if aircraft.high_performance {
            self.high_performance_time += hours;
        }

        self.day_time += conditions.day;
        self.night_time += conditions.night;
        self.actual_instrument += conditions.actual_instrument;
        self.simulated_instrument += conditions.simulated_instrument;
        self.instrument_time += conditions.total_instrument();
        self.cross_country += conditions.cross_country;

        self.pic_time += entry.pic_time;
        self.sic_time += entry.sic_time;
        self.solo_time += entry.solo_time;
        self.dual_received += entry.dual_received;
        self.dual_given += entry.dual_given;
        self.ground_training += entry.ground_training;

        // Garbled count cells can reach u32::MAX
        self.day_landings = self.day_landings.saturating_add(entry.landings_day);
        self.night_landings = self.night_landings.saturating_add(entry.landings_night);
        self.total_landings = self.total_landings.saturating_add(entry.total_landings());
        self.total_takeoffs = self.total_takeoffs.saturating_add(entry.total_takeoffs());
    }

    /// Copy with every hour field rounded to one decimal place
    pub fn rounded(&self) -> Self {
        let r = round_tenth;
        Self {
            total_time: r(self.total_time),
            tailwheel_time: r(self.tailwheel_time),
            tricycle_time: r(self.tricycle_time),
            asel_time: r(self.asel_time),
            amel_time: r(self.amel_time),
            ases_time: r(self.ases_time),
            ames_time: r(self.ames_time),
            helicopter_time: r(self.helicopter_time),
            gyroplane_time: r(self.gyroplane_time),
            glider_time: r(self.glider_time),
            complex_time: r(self.complex_time),
            high_performance_time: r(self.high_performance_time),
            day_time: r(self.day_time),
            night_time: r(self.night_time),
            actual_instrument: r(self.actual_instrument),
            simulated_instrument: r(self.simulated_instrument),
            instrument_time: r(self.instrument_time),
            cross_country: r(self.cross_country),
            pic_time: r(self.pic_time),
            sic_time: r(self.sic_time),
            solo_time: r(self.solo_time),
            dual_received: r(self.dual_received),
            dual_given: r(self.dual_given),
            ground_training: r(self.ground_training),
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} flights, {:.1} total, {:.1} PIC, {:.1} night, {:.1} instrument, {:.1} cross-country, {} landings",
            self.flights,
            self.total_time,
            self.pic_time,
            self.night_time,
            self.instrument_time,
            self.cross_country,
            self.total_landings
        )
    }
}

/// Reduce entries to statistics, hour fields rounded to one decimal place
///
/// Accepts any entry stage (`LogbookEntry`, `ValidatedEntry`,
/// `AggregatedEntry`), so callers can filter before aggregating.
pub fn aggregate<'a, I, E>(entries: I) -> FlightStatistics
where
    I: IntoIterator<Item = &'a E>,
    E: AsRef<LogbookEntry> + 'a,
{
    let mut stats = FlightStatistics::new();
    for entry in entries {
        stats.add(entry.as_ref());
    }
    stats.rounded()
}
