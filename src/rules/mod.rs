//! Delayed-retirement policy rules: the delay table and reform constants

mod delay;
mod reform;

pub use delay::DelayRule;
pub use reform::ReformPolicy;
