//! Fixed constants of the delayed-retirement reform

use chrono::{Datelike, NaiveDate};

/// Reform constants shared by every calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReformPolicy {
    /// Date the graduated delay starts accruing
    pub start_date: NaiveDate,
}

impl ReformPolicy {
    /// The statutory reform, effective 2025-01-01
    pub const fn statutory() -> Self {
        Self {
            start_date: match NaiveDate::from_ymd_opt(2025, 1, 1) {
                Some(date) => date,
                None => unreachable!(),
            },
        }
    }

    /// Calendar months from the start date to `date`, counting the month of `date`
    ///
    /// Zero or negative when `date` falls before the start month.
    pub fn months_until(&self, date: NaiveDate) -> i64 {
        let years = i64::from(date.year()) - i64::from(self.start_date.year());
        let months = i64::from(date.month0()) - i64::from(self.start_date.month0());
        years * 12 + months + 1
    }
}

impl Default for ReformPolicy {
    fn default() -> Self {
        Self::statutory()
    }
}
