//! Error types for the retirement calculator

use thiserror::Error;

/// Failures raised by the calculator and the record loader
#[derive(Debug, Error)]
pub enum RetirementError {
    /// Category tag is not one of `male`, `female50`, `female55`
    #[error("invalid worker category '{0}': expected 'male', 'female50' or 'female55'")]
    InvalidCategory(String),

    /// Birth year lies outside the range the calendar can represent
    #[error("birth date {year}-{month:02} is outside the supported calendar range")]
    DateOutOfRange { year: i32, month: i32 },

    /// CSV read or parse failure while loading birth records
    #[error("failed to read birth records: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RetirementError>;
