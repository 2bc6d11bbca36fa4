//! Birth record data structures matching the calculator input contract

use crate::error::{Result, RetirementError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Worker category under the pre-reform rules
///
/// Female categories carry the worker's ORIGINAL statutory retirement age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkerCategory {
    /// Male worker, originally retiring at 60
    #[serde(rename = "male")]
    MaleWorker,
    /// Female worker originally retiring at 50
    #[serde(rename = "female50")]
    FemaleWorker50,
    /// Female worker originally retiring at 55
    #[serde(rename = "female55")]
    FemaleWorker55,
}

impl WorkerCategory {
    pub const ALL: [WorkerCategory; 3] = [
        WorkerCategory::MaleWorker,
        WorkerCategory::FemaleWorker50,
        WorkerCategory::FemaleWorker55,
    ];

    /// Statutory retirement age before the reform, in whole years
    pub fn original_retirement_age(&self) -> u32 {
        match self {
            WorkerCategory::MaleWorker => 60,
            WorkerCategory::FemaleWorker50 => 50,
            WorkerCategory::FemaleWorker55 => 55,
        }
    }

    /// Tag submitted by the input form
    pub fn as_tag(&self) -> &'static str {
        match self {
            WorkerCategory::MaleWorker => "male",
            WorkerCategory::FemaleWorker50 => "female50",
            WorkerCategory::FemaleWorker55 => "female55",
        }
    }

    /// Human-readable description for reports
    pub fn describe(&self) -> &'static str {
        match self {
            WorkerCategory::MaleWorker => "male worker",
            WorkerCategory::FemaleWorker50 => "female worker (original retirement age 50)",
            WorkerCategory::FemaleWorker55 => "female worker (original retirement age 55)",
        }
    }
}

impl FromStr for WorkerCategory {
    type Err = RetirementError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "maleworker" => Ok(WorkerCategory::MaleWorker),
            "female50" | "femaleworker50" => Ok(WorkerCategory::FemaleWorker50),
            "female55" | "femaleworker55" => Ok(WorkerCategory::FemaleWorker55),
            _ => {
                log::warn!("Rejected worker category '{}'", s);
                Err(RetirementError::InvalidCategory(s.to_string()))
            }
        }
    }
}

impl fmt::Display for WorkerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A single calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthRecord {
    /// Calendar year of birth
    pub birth_year: i32,

    /// Month of birth, 1-indexed
    pub birth_month: i32,

    /// Worker category
    pub category: WorkerCategory,
}

impl BirthRecord {
    pub fn new(birth_year: i32, birth_month: i32, category: WorkerCategory) -> Self {
        Self {
            birth_year,
            birth_month,
            category,
        }
    }

    /// Build a record from a raw category tag
    pub fn parse(birth_year: i32, birth_month: i32, category: &str) -> Result<Self> {
        Ok(Self::new(birth_year, birth_month, category.parse()?))
    }

    /// First day of the birth month
    ///
    /// Months outside 1..=12 roll into the neighbouring years, so month 13 is
    /// January of the following year and month 0 is December of the previous one.
    pub fn birth_date(&self) -> Result<NaiveDate> {
        let out_of_range = || RetirementError::DateOutOfRange {
            year: self.birth_year,
            month: self.birth_month,
        };

        let total_months = i64::from(self.birth_year) * 12 + i64::from(self.birth_month) - 1;
        let year = i32::try_from(total_months.div_euclid(12)).map_err(|_| out_of_range())?;
        let month = (total_months.rem_euclid(12) + 1) as u32;

        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_original_retirement_ages() {
        assert_eq!(WorkerCategory::MaleWorker.original_retirement_age(), 60);
        assert_eq!(WorkerCategory::FemaleWorker50.original_retirement_age(), 50);
        assert_eq!(WorkerCategory::FemaleWorker55.original_retirement_age(), 55);
    }

    #[test]
    fn test_parse_category_tags() {
        assert_eq!("male".parse::<WorkerCategory>().unwrap(), WorkerCategory::MaleWorker);
        assert_eq!("female50".parse::<WorkerCategory>().unwrap(), WorkerCategory::FemaleWorker50);
        assert_eq!(" Female55 ".parse::<WorkerCategory>().unwrap(), WorkerCategory::FemaleWorker55);
        assert_eq!("MaleWorker".parse::<WorkerCategory>().unwrap(), WorkerCategory::MaleWorker);

        for tag in WorkerCategory::ALL.iter().map(|c| c.as_tag()) {
            assert_eq!(tag.parse::<WorkerCategory>().unwrap().as_tag(), tag);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_category() {
        for bad in ["unknown", "invalid", "", "female", "female60"] {
            match bad.parse::<WorkerCategory>() {
                Err(RetirementError::InvalidCategory(tag)) => assert_eq!(tag, bad),
                other => panic!("expected InvalidCategory for '{}', got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_serde_uses_form_tags() {
        let record = BirthRecord::new(1975, 6, WorkerCategory::FemaleWorker50);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"female50\""));

        let back: BirthRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);

        let bad = r#"{"birth_year":1970,"birth_month":1,"category":"unknown"}"#;
        assert!(serde_json::from_str::<BirthRecord>(bad).is_err());
    }

    #[test]
    fn test_birth_date_is_first_of_month() {
        let record = BirthRecord::new(1970, 1, WorkerCategory::MaleWorker);
        assert_eq!(record.birth_date().unwrap(), ymd(1970, 1, 1));

        let record = BirthRecord::new(1975, 12, WorkerCategory::FemaleWorker55);
        assert_eq!(record.birth_date().unwrap(), ymd(1975, 12, 1));
    }

    #[test]
    fn test_birth_date_month_rollover() {
        let record = BirthRecord::new(1970, 13, WorkerCategory::MaleWorker);
        assert_eq!(record.birth_date().unwrap(), ymd(1971, 1, 1));

        let record = BirthRecord::new(1970, 0, WorkerCategory::MaleWorker);
        assert_eq!(record.birth_date().unwrap(), ymd(1969, 12, 1));

        let record = BirthRecord::new(1970, -11, WorkerCategory::MaleWorker);
        assert_eq!(record.birth_date().unwrap(), ymd(1969, 1, 1));
    }

    #[test]
    fn test_birth_date_out_of_calendar_range() {
        let record = BirthRecord::new(i32::MAX, 1, WorkerCategory::MaleWorker);
        assert!(matches!(
            record.birth_date(),
            Err(RetirementError::DateOutOfRange { .. })
        ));
    }
}
