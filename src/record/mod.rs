//! Birth records and worker categories

mod data;
pub mod loader;

pub use data::{BirthRecord, WorkerCategory};
pub use loader::{load_records, load_records_from_reader, RecordOutcome};
