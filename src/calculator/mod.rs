//! Retirement date calculation under the graduated delay policy

pub mod dates;
mod engine;
mod result;

pub use engine::{compute, RetirementCalculator};
pub use result::RetirementResult;
