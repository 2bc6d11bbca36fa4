//! Calculation output

use crate::record::BirthRecord;
use chrono::NaiveDate;
use serde::Serialize;

/// Original vs. reformed retirement timing for one birth record
///
/// Every field is derived from the input record, the reference date and the
/// fixed policy constants. Fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetirementResult {
    record: BirthRecord,
    reference_date: NaiveDate,
    original_retirement_age: u32,
    original_retirement_date: NaiveDate,
    days_until_original_retirement: i64,
    delay_months: u32,
    reformed_retirement_age: f64,
    reformed_retirement_date: NaiveDate,
    days_until_reformed_retirement: i64,
}

impl RetirementResult {
    /// Result for a subject already past the original retirement date
    pub(crate) fn without_delay(
        record: BirthRecord,
        reference_date: NaiveDate,
        original_retirement_date: NaiveDate,
        days_until_original_retirement: i64,
    ) -> Self {
        let original_retirement_age = record.category.original_retirement_age();
        Self {
            record,
            reference_date,
            original_retirement_age,
            original_retirement_date,
            days_until_original_retirement,
            delay_months: 0,
            reformed_retirement_age: f64::from(original_retirement_age),
            reformed_retirement_date: original_retirement_date,
            days_until_reformed_retirement: days_until_original_retirement,
        }
    }

    pub(crate) fn with_delay(
        record: BirthRecord,
        reference_date: NaiveDate,
        original_retirement_date: NaiveDate,
        days_until_original_retirement: i64,
        delay_months: u32,
        reformed_retirement_date: NaiveDate,
        days_until_reformed_retirement: i64,
    ) -> Self {
        let original_retirement_age = record.category.original_retirement_age();
        Self {
            record,
            reference_date,
            original_retirement_age,
            original_retirement_date,
            days_until_original_retirement,
            delay_months,
            reformed_retirement_age: f64::from(original_retirement_age)
                + f64::from(delay_months) / 12.0,
            reformed_retirement_date,
            days_until_reformed_retirement,
        }
    }

    pub fn record(&self) -> &BirthRecord {
        &self.record
    }

    /// Date the day counts are measured from
    pub fn reference_date(&self) -> NaiveDate {
        self.reference_date
    }

    pub fn original_retirement_age(&self) -> u32 {
        self.original_retirement_age
    }

    pub fn original_retirement_date(&self) -> NaiveDate {
        self.original_retirement_date
    }

    pub fn days_until_original_retirement(&self) -> i64 {
        self.days_until_original_retirement
    }

    pub fn delay_months(&self) -> u32 {
        self.delay_months
    }

    /// Reformed age in fractional years (original age + delay / 12)
    pub fn reformed_retirement_age(&self) -> f64 {
        self.reformed_retirement_age
    }

    pub fn reformed_retirement_date(&self) -> NaiveDate {
        self.reformed_retirement_date
    }

    pub fn days_until_reformed_retirement(&self) -> i64 {
        self.days_until_reformed_retirement
    }

    /// Reformed age rounded to two decimals, as displayed to users
    pub fn reformed_age_display(&self) -> f64 {
        (self.reformed_retirement_age * 100.0).round() / 100.0
    }

    /// Reformed age as (whole years, remaining months)
    pub fn reformed_age_parts(&self) -> (u32, u32) {
        let total_months = self.original_retirement_age * 12 + self.delay_months;
        (total_months / 12, total_months % 12)
    }

    /// Whether the original retirement date was already behind the reference date
    pub fn is_retired_under_original(&self) -> bool {
        self.days_until_original_retirement < 0
    }

    /// Whether the reform moved the retirement date at all
    pub fn reform_applies(&self) -> bool {
        self.delay_months > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::WorkerCategory;
    use approx::assert_relative_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_reformed_age_views() {
        let result = RetirementResult::with_delay(
            BirthRecord::new(1970, 1, WorkerCategory::MaleWorker),
            ymd(2025, 6, 1),
            ymd(2030, 1, 1),
            1675,
            16,
            ymd(2031, 5, 1),
            2160,
        );

        assert_relative_eq!(result.reformed_retirement_age(), 60.0 + 16.0 / 12.0);
        assert_relative_eq!(result.reformed_age_display(), 61.33);
        assert_eq!(result.reformed_age_parts(), (61, 4));
        assert!(result.reform_applies());
        assert!(!result.is_retired_under_original());
    }

    #[test]
    fn test_without_delay_mirrors_original() {
        let result = RetirementResult::without_delay(
            BirthRecord::new(1960, 1, WorkerCategory::MaleWorker),
            ymd(2025, 6, 1),
            ymd(2020, 1, 1),
            -1978,
        );

        assert_eq!(result.delay_months(), 0);
        assert_eq!(result.reformed_retirement_date(), result.original_retirement_date());
        assert_eq!(
            result.days_until_reformed_retirement(),
            result.days_until_original_retirement()
        );
        assert_eq!(result.reformed_retirement_age(), 60.0);
        assert_eq!(result.reformed_age_parts(), (60, 0));
        assert!(result.is_retired_under_original());
        assert!(!result.reform_applies());
    }
}
