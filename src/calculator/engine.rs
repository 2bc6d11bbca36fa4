//! Core retirement calculator

use super::dates::{add_months, add_years, days_between};
use super::RetirementResult;
use crate::error::{Result, RetirementError};
use crate::record::BirthRecord;
use crate::rules::{DelayRule, ReformPolicy};
use chrono::NaiveDate;

/// Computes original and reformed retirement timing
///
/// Holds only the immutable reform constants, so one calculator can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetirementCalculator {
    policy: ReformPolicy,
}

impl RetirementCalculator {
    pub fn new(policy: ReformPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReformPolicy {
        &self.policy
    }

    /// Calculate retirement timing for `record` as seen from `reference_date`
    pub fn calculate(&self, record: &BirthRecord, reference_date: NaiveDate) -> Result<RetirementResult> {
        let out_of_range = || RetirementError::DateOutOfRange {
            year: record.birth_year,
            month: record.birth_month,
        };

        let birth_date = record.birth_date()?;
        let original_age = record.category.original_retirement_age();
        let original_date = add_years(birth_date, original_age).ok_or_else(out_of_range)?;
        let days_until_original = days_between(original_date, reference_date);

        // Already past the pre-reform age: the reform is not applied retroactively.
        if days_until_original < 0 {
            log::debug!(
                "{}-{:02} {}: original date {} already passed, no delay",
                record.birth_year,
                record.birth_month,
                record.category,
                original_date
            );
            return Ok(RetirementResult::without_delay(
                *record,
                reference_date,
                original_date,
                days_until_original,
            ));
        }

        let months_between = self.policy.months_until(original_date);
        let delay_months = DelayRule::for_category(record.category).delay_for(months_between);
        let reformed_date = add_months(original_date, delay_months).ok_or_else(out_of_range)?;
        let days_until_reformed = days_between(reformed_date, reference_date);

        log::debug!(
            "{}-{:02} {}: {} eligible months, delay {} months, reformed date {}",
            record.birth_year,
            record.birth_month,
            record.category,
            months_between,
            delay_months,
            reformed_date
        );

        Ok(RetirementResult::with_delay(
            *record,
            reference_date,
            original_date,
            days_until_original,
            delay_months,
            reformed_date,
            days_until_reformed,
        ))
    }
}

/// Calculate retirement timing from raw inputs under the statutory reform
///
/// Fails with [`RetirementError::InvalidCategory`] when `category` is not one of
/// `male`, `female50` or `female55`.
pub fn compute(
    birth_year: i32,
    birth_month: i32,
    category: &str,
    reference_date: NaiveDate,
) -> Result<RetirementResult> {
    let record = BirthRecord::parse(birth_year, birth_month, category)?;
    RetirementCalculator::default().calculate(&record, reference_date)
}
