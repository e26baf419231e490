//! Date-windowed statistics

use super::aggregator::{FlightStatistics, aggregate};
use crate::app::models::LogbookEntry;
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting window, evaluated against an explicit `today`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatisticsWindow {
    /// January 1st of today's year through today
    CurrentYear,
    /// Today and the 30 days before it
    Last30Days,
    /// Today and the 365 days before it
    Last365Days,
    AllTime,
}

impl StatisticsWindow {
    pub const ALL: [StatisticsWindow; 4] = [
        StatisticsWindow::CurrentYear,
        StatisticsWindow::Last30Days,
        StatisticsWindow::Last365Days,
        StatisticsWindow::AllTime,
    ];

    /// First date inside the window, `None` for all time
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::CurrentYear => NaiveDate::from_ymd_opt(today.year(), 1, 1),
            Self::Last30Days => Some(today - Duration::days(30)),
            Self::Last365Days => Some(today - Duration::days(365)),
            Self::AllTime => None,
        }
    }

    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self.start_date(today) {
            Some(start) => start <= date && date <= today,
            None => true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CurrentYear => "current year",
            Self::Last30Days => "last 30 days",
            Self::Last365Days => "last 365 days",
            Self::AllTime => "all time",
        }
    }
}

impl fmt::Display for StatisticsWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Statistics for every reporting window
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowedStatistics {
    pub current_year: FlightStatistics,
    pub last_30_days: FlightStatistics,
    pub last_365_days: FlightStatistics,
    pub all_time: FlightStatistics,
}

impl WindowedStatistics {
    /// Aggregate each window over `entries` as of `today`
    pub fn compute<E: AsRef<LogbookEntry>>(entries: &[E], today: NaiveDate) -> Self {
        let window = |window: StatisticsWindow| {
            aggregate(
                entries
                    .iter()
                    .filter(|entry| window.contains(entry.as_ref().date, today)),
            )
        };

        Self {
            current_year: window(StatisticsWindow::CurrentYear),
            last_30_days: window(StatisticsWindow::Last30Days),
            last_365_days: window(StatisticsWindow::Last365Days),
            all_time: aggregate(entries),
        }
    }

    pub fn get(&self, window: StatisticsWindow) -> &FlightStatistics {
        match window {
            StatisticsWindow::CurrentYear => &self.current_year,
            StatisticsWindow::Last30Days => &self.last_30_days,
            StatisticsWindow::Last365Days => &self.last_365_days,
            StatisticsWindow::AllTime => &self.all_time,
        }
    }
}
