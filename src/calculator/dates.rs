//! Calendar arithmetic used by the calculator

use chrono::{Months, NaiveDate};

/// Advance `date` by whole years, clamping to the end of the month when needed
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// Advance `date` by whole months, clamping to the end of the month when needed
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Signed whole days from `reference` to `target` (negative if `target` is past)
pub fn days_between(target: NaiveDate, reference: NaiveDate) -> i64 {
    target.signed_duration_since(reference).num_days()
}
