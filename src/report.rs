//! Text rendering of calculation results for terminals and commentary prompts

use crate::calculator::RetirementResult;
use chrono::{Datelike, NaiveDate};

/// Format a date as `YYYY-MM`
pub fn format_year_month(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Label for a signed day count: time remaining when positive, otherwise already retired
pub fn countdown_label(days: i64) -> &'static str {
    if days > 0 {
        "time remaining"
    } else {
        "already retired"
    }
}

/// Signed day count as `<label>: <n> days`
pub fn format_countdown(days: i64) -> String {
    format!("{}: {} days", countdown_label(days), days.unsigned_abs())
}

/// Multi-line summary comparing original and reformed retirement
pub fn render_text(result: &RetirementResult) -> String {
    let record = result.record();
    let (years, months) = result.reformed_age_parts();

    let lines = [
        format!(
            "Born {:04}-{:02}, {}",
            record.birth_year,
            record.birth_month,
            record.category.describe()
        ),
        format!("As of {}", result.reference_date()),
        String::new(),
        "Original retirement".to_string(),
        format!("  Age:  {}", result.original_retirement_age()),
        format!("  Date: {}", format_year_month(result.original_retirement_date())),
        format!("  {}", format_countdown(result.days_until_original_retirement())),
        String::new(),
        "Reformed retirement".to_string(),
        format!(
            "  Age:   {:.2} ({} years {} months)",
            result.reformed_age_display(),
            years,
            months
        ),
        format!("  Date:  {}", format_year_month(result.reformed_retirement_date())),
        format!("  Delay: {} months", result.delay_months()),
        format!("  {}", format_countdown(result.days_until_reformed_retirement())),
    ];

    lines.join("\n")
}

/// Natural-language summary handed to an external commentary generator
pub fn commentary_prompt(result: &RetirementResult) -> String {
    let record = result.record();
    format!(
        "TOPIC: delayed retirement. BACKGROUND: birth year: {}, birth month: {}, category: {}, \
         original retirement age: {}, original retirement date: {}, delay: {} months, \
         days until retirement: {}",
        record.birth_year,
        record.birth_month,
        record.category.describe(),
        result.original_retirement_age(),
        format_year_month(result.original_retirement_date()),
        result.delay_months(),
        result.days_until_reformed_retirement(),
    )
}
