//! Retirement Age CLI
//!
//! Command-line interface for computing reformed retirement ages

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use retirement_age::{
    record::load_records,
    report::{commentary_prompt, format_year_month, render_text},
    RetirementCalculator,
};
use serde::Serialize;
use std::io;

/// Retirement age calculator
#[derive(Parser)]
#[command(name = "retirement")]
#[command(about = "Statutory retirement age under the graduated delayed-retirement reform", long_about = None)]
#[command(version)]
struct Cli {
    /// Date the day counts are measured from (defaults to today)
    #[arg(short, long, global = true, env = "RETIREMENT_REFERENCE_DATE")]
    reference_date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate retirement timing for one person
    Calc {
        /// Birth year
        #[arg(short = 'y', long)]
        birth_year: i32,

        /// Birth month (1-12)
        #[arg(short = 'm', long)]
        birth_month: i32,

        /// Worker category: male, female50 or female55
        #[arg(short, long)]
        category: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also print the commentary prompt
        #[arg(long)]
        prompt: bool,
    },

    /// Calculate every row of a BirthYear,BirthMonth,Category CSV file
    Batch {
        /// Input CSV file
        #[arg(short, long)]
        input: String,

        /// Output CSV file (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// One output row of a batch run; failed rows carry only the error
#[derive(Debug, Serialize)]
struct BatchRow {
    #[serde(rename = "Row")]
    row: usize,
    #[serde(rename = "BirthYear")]
    birth_year: Option<i32>,
    #[serde(rename = "BirthMonth")]
    birth_month: Option<i32>,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "OriginalAge")]
    original_age: Option<u32>,
    #[serde(rename = "OriginalDate")]
    original_date: Option<String>,
    #[serde(rename = "DaysUntilOriginal")]
    days_until_original: Option<i64>,
    #[serde(rename = "DelayMonths")]
    delay_months: Option<u32>,
    #[serde(rename = "ReformedAge")]
    reformed_age: Option<f64>,
    #[serde(rename = "ReformedDate")]
    reformed_date: Option<String>,
    #[serde(rename = "DaysUntilReformed")]
    days_until_reformed: Option<i64>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl BatchRow {
    fn failed(row: usize, category: String, error: String) -> Self {
        Self {
            row,
            birth_year: None,
            birth_month: None,
            category,
            original_age: None,
            original_date: None,
            days_until_original: None,
            delay_months: None,
            reformed_age: None,
            reformed_date: None,
            days_until_reformed: None,
            error: Some(error),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let reference_date = cli
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    log::debug!("Reference date {}", reference_date);

    let calculator = RetirementCalculator::default();

    match cli.command {
        Commands::Calc {
            birth_year,
            birth_month,
            category,
            format,
            prompt,
        } => {
            let result = retirement_age::compute(birth_year, birth_month, &category, reference_date)
                .with_context(|| format!("cannot calculate retirement for {}-{:02}", birth_year, birth_month))?;

            match format {
                OutputFormat::Text => println!("{}", render_text(&result)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
            }

            if prompt {
                println!("\n{}", commentary_prompt(&result));
            }
        }
        Commands::Batch { input, output } => {
            run_batch(&calculator, &input, output.as_deref(), reference_date)?;
        }
    }

    Ok(())
}

fn run_batch(
    calculator: &RetirementCalculator,
    input: &str,
    output: Option<&str>,
    reference_date: NaiveDate,
) -> Result<()> {
    let outcomes = load_records(input).with_context(|| format!("failed to load {}", input))?;

    let mut failures = 0;
    let rows: Vec<BatchRow> = outcomes
        .into_iter()
        .map(|outcome| {
            let calculated = outcome
                .record
                .and_then(|record| calculator.calculate(&record, reference_date));

            match calculated {
                Ok(result) => BatchRow {
                    row: outcome.row,
                    birth_year: Some(result.record().birth_year),
                    birth_month: Some(result.record().birth_month),
                    category: result.record().category.as_tag().to_string(),
                    original_age: Some(result.original_retirement_age()),
                    original_date: Some(format_year_month(result.original_retirement_date())),
                    days_until_original: Some(result.days_until_original_retirement()),
                    delay_months: Some(result.delay_months()),
                    reformed_age: Some(result.reformed_age_display()),
                    reformed_date: Some(format_year_month(result.reformed_retirement_date())),
                    days_until_reformed: Some(result.days_until_reformed_retirement()),
                    error: None,
                },
                Err(err) => {
                    log::warn!("Row {}: {}", outcome.row, err);
                    failures += 1;
                    BatchRow::failed(outcome.row, outcome.raw_category, err.to_string())
                }
            }
        })
        .collect();

    let mut writer = match output {
        Some(path) => csv::Writer::from_writer(
            Box::new(std::fs::File::create(path).with_context(|| format!("failed to create {}", path))?)
                as Box<dyn io::Write>,
        ),
        None => csv::Writer::from_writer(Box::new(io::stdout()) as Box<dyn io::Write>),
    };

    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    log::info!("Batch complete: {} rows, {} failed", rows.len(), failures);
    if failures > 0 {
        eprintln!("{} of {} rows failed; see the Error column", failures, rows.len());
    }

    Ok(())
}
