//! Cohort table: retirement timing for every birth month in a year range

use crate::calculator::{RetirementCalculator, RetirementResult};
use crate::error::Result;
use crate::record::{BirthRecord, WorkerCategory};
use crate::report::format_year_month;
use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;

/// Flat row for CSV output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CohortRow {
    #[serde(rename = "Category")]
    pub category: WorkerCategory,
    #[serde(rename = "BirthYear")]
    pub birth_year: i32,
    #[serde(rename = "BirthMonth")]
    pub birth_month: i32,
    #[serde(rename = "OriginalAge")]
    pub original_age: u32,
    #[serde(rename = "OriginalDate")]
    pub original_date: String,
    #[serde(rename = "DelayMonths")]
    pub delay_months: u32,
    #[serde(rename = "ReformedAge")]
    pub reformed_age: f64,
    #[serde(rename = "ReformedAgeYears")]
    pub reformed_age_years: u32,
    #[serde(rename = "ReformedAgeMonths")]
    pub reformed_age_months: u32,
    #[serde(rename = "ReformedDate")]
    pub reformed_date: String,
}

impl From<&RetirementResult> for CohortRow {
    fn from(result: &RetirementResult) -> Self {
        let record = result.record();
        let (years, months) = result.reformed_age_parts();
        Self {
            category: record.category,
            birth_year: record.birth_year,
            birth_month: record.birth_month,
            original_age: result.original_retirement_age(),
            original_date: format_year_month(result.original_retirement_date()),
            delay_months: result.delay_months(),
            reformed_age: result.reformed_age_display(),
            reformed_age_years: years,
            reformed_age_months: months,
            reformed_date: format_year_month(result.reformed_retirement_date()),
        }
    }
}

/// Calculate every (category, birth year, birth month) in `first_year..=last_year`
///
/// Rows come back ordered by category, then year, then month.
pub fn cohort_table(
    calculator: &RetirementCalculator,
    first_year: i32,
    last_year: i32,
    reference_date: NaiveDate,
) -> Result<Vec<RetirementResult>> {
    let records: Vec<BirthRecord> = WorkerCategory::ALL
        .iter()
        .flat_map(|&category| {
            (first_year..=last_year).flat_map(move |year| {
                (1..=12).map(move |month| BirthRecord::new(year, month, category))
            })
        })
        .collect();

    log::debug!("Calculating {} cohort records", records.len());

    // Indexed parallel collect keeps input order
    records
        .par_iter()
        .map(|record| calculator.calculate(record, reference_date))
        .collect()
}
