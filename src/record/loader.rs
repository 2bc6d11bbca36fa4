//! Load birth records from CSV

use super::BirthRecord;
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Raw CSV row: `BirthYear,BirthMonth,Category`
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "BirthYear")]
    birth_year: i32,
    #[serde(rename = "BirthMonth")]
    birth_month: i32,
    #[serde(rename = "Category")]
    category: String,
}

/// Outcome of validating one CSV row
///
/// An unrecognized category fails only its own row.
#[derive(Debug)]
pub struct RecordOutcome {
    /// 1-based data row number (header excluded)
    pub row: usize,
    /// Category tag exactly as it appeared in the file
    pub raw_category: String,
    pub record: Result<BirthRecord>,
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<RecordOutcome>> {
    let mut outcomes = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        let record = BirthRecord::parse(row.birth_year, row.birth_month, &row.category);
        outcomes.push(RecordOutcome {
            row: idx + 1,
            raw_category: row.category,
            record,
        });
    }

    log::debug!("Loaded {} birth record rows", outcomes.len());
    Ok(outcomes)
}

/// Load all birth records from a CSV file
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<RecordOutcome>> {
    read_rows(Reader::from_path(path)?)
}

/// Load birth records from any reader (e.g., string buffer, stdin)
pub fn load_records_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<RecordOutcome>> {
    read_rows(Reader::from_reader(reader))
}
