//! Instructor endorsement validity interval

use crate::constants::thresholds::ENDORSEMENT_VALIDITY_DAYS;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A time-bounded authorization for a student to log solo PIC time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstructorEndorsement {
    pub start_date: NaiveDate,
    pub expiration_date: NaiveDate,
}

impl InstructorEndorsement {
    /// Endorsement valid for the standard 90 days from `start_date`
    pub fn new(start_date: NaiveDate) -> Self {
        Self::with_validity(start_date, ENDORSEMENT_VALIDITY_DAYS)
    }

    /// Endorsement valid for `days` days from `start_date`
    pub fn with_validity(start_date: NaiveDate, days: i64) -> Self {
        Self {
            start_date,
            expiration_date: start_date + Duration::days(days),
        }
    }

    /// Whether `date` falls within `[start_date, expiration_date]`
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.expiration_date
    }
}
