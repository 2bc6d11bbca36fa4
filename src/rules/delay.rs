//! Delay accrual table keyed by original retirement age

use crate::record::WorkerCategory;
use serde::Serialize;

/// One row of the delay table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelayRule {
    /// Maximum total delay in months
    pub max_delay_months: u32,

    /// Months of policy-eligible time that earn one month of delay
    pub accrual_interval_months: u32,
}

impl DelayRule {
    const STANDARD: DelayRule = DelayRule {
        max_delay_months: 36,
        accrual_interval_months: 4,
    };

    const FEMALE_50: DelayRule = DelayRule {
        max_delay_months: 60,
        accrual_interval_months: 2,
    };

    /// Rule for an original retirement age (60, 55 or 50)
    pub fn for_original_age(original_age: u32) -> Option<DelayRule> {
        match original_age {
            60 | 55 => Some(Self::STANDARD),
            50 => Some(Self::FEMALE_50),
            _ => None,
        }
    }

    /// Rule for a worker category; every category has one
    pub fn for_category(category: WorkerCategory) -> DelayRule {
        match category {
            WorkerCategory::MaleWorker | WorkerCategory::FemaleWorker55 => Self::STANDARD,
            WorkerCategory::FemaleWorker50 => Self::FEMALE_50,
        }
    }

    /// Delay earned by `months_between` months of eligible time
    ///
    /// Any partial interval counts as a full step. The result is clamped to
    /// `0..=max_delay_months`, so zero or negative counts earn no delay.
    pub fn delay_for(&self, months_between: i64) -> u32 {
        let steps = ceil_div(months_between, i64::from(self.accrual_interval_months));
        steps.clamp(0, i64::from(self.max_delay_months)) as u32
    }
}

/// Ceiling division for a positive divisor
fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    let quotient = numerator.div_euclid(divisor);
    if numerator.rem_euclid(divisor) == 0 {
        quotient
    } else {
        quotient + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_rows() {
        let male = DelayRule::for_original_age(60).unwrap();
        assert_eq!(male.max_delay_months, 36);
        assert_eq!(male.accrual_interval_months, 4);

        assert_eq!(DelayRule::for_original_age(55), Some(male));

        let female_50 = DelayRule::for_original_age(50).unwrap();
        assert_eq!(female_50.max_delay_months, 60);
        assert_eq!(female_50.accrual_interval_months, 2);

        assert_eq!(DelayRule::for_original_age(65), None);
    }

    #[test]
    fn test_every_category_has_a_rule() {
        for category in WorkerCategory::ALL {
            let by_age = DelayRule::for_original_age(category.original_retirement_age());
            assert_eq!(by_age, Some(DelayRule::for_category(category)));
        }
    }

    #[test]
    fn test_ceil_div() {
        assert_eq!(ceil_div(61, 4), 16);
        assert_eq!(ceil_div(60, 4), 15);
        assert_eq!(ceil_div(1, 4), 1);
        assert_eq!(ceil_div(0, 4), 0);
        assert_eq!(ceil_div(-1, 4), 0);
        assert_eq!(ceil_div(-5, 4), -1);
    }

    #[test]
    fn test_delay_partial_interval_counts() {
        let rule = DelayRule::for_category(WorkerCategory::MaleWorker);
        assert_eq!(rule.delay_for(1), 1);
        assert_eq!(rule.delay_for(4), 1);
        assert_eq!(rule.delay_for(5), 2);
        assert_eq!(rule.delay_for(61), 16);

        let rule = DelayRule::for_category(WorkerCategory::FemaleWorker50);
        assert_eq!(rule.delay_for(6), 3);
        assert_eq!(rule.delay_for(7), 4);
    }

    #[test]
    fn test_delay_capped_at_max() {
        let rule = DelayRule::for_category(WorkerCategory::MaleWorker);
        assert_eq!(rule.delay_for(144), 36);
        assert_eq!(rule.delay_for(145), 36);
        assert_eq!(rule.delay_for(10_000), 36);

        let rule = DelayRule::for_category(WorkerCategory::FemaleWorker50);
        assert_eq!(rule.delay_for(120), 60);
        assert_eq!(rule.delay_for(121), 60);
    }

    #[test]
    fn test_delay_floors_at_zero() {
        for category in WorkerCategory::ALL {
            let rule = DelayRule::for_category(category);
            assert_eq!(rule.delay_for(0), 0);
            assert_eq!(rule.delay_for(-1), 0);
            assert_eq!(rule.delay_for(-35), 0);
            assert_eq!(rule.delay_for(i64::MIN / 2), 0);
        }
    }
}
