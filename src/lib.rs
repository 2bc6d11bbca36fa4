//! Retirement Age - statutory retirement age calculator for the graduated
//! delayed-retirement reform
//!
//! This library provides:
//! - Birth record and worker category types, with CSV loading
//! - The delay accrual table and reform constants
//! - The retirement calculator (original vs. reformed age and date)
//! - Cohort tables over birth-year ranges
//! - Text reports and commentary prompts for presentation layers

pub mod calculator;
pub mod cohort;
pub mod error;
pub mod record;
pub mod report;
pub mod rules;

// Re-export commonly used types
pub use calculator::{compute, RetirementCalculator, RetirementResult};
pub use error::RetirementError;
pub use record::{BirthRecord, WorkerCategory};
pub use rules::{DelayRule, ReformPolicy};
