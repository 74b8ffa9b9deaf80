//! Headless mode - generate once and print, no TUI
//!
//! Plain output is one number per line. With `--json` each number becomes an
//! NDJSON record:
//!
//! ```json
//! {"index":0,"number":"+81 90 1234 5678"}
//! {"index":1,"number":"+81 80 2345 6789"}
//! ```

pub mod runner;

pub use runner::{list_countries, run_headless};

use std::io::Write;
use std::path::PathBuf;

use dialgen_core::prelude::*;
use dialgen_core::{CountryPhoneFormat, ResultSet};
use serde::Serialize;

/// Headless-only flags
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    /// Emit NDJSON records instead of bare numbers
    pub json: bool,
    /// Write the export file here instead of printing
    pub output: Option<PathBuf>,
    /// Verify every number against the country's shape before output
    pub check: bool,
}

/// One generated number in NDJSON output
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessRecord<'a> {
    /// Zero-based position in the result set
    pub index: usize,
    pub number: &'a str,
}

/// Write every number in `results` to `out`
pub fn write_numbers<W: Write>(out: &mut W, results: &ResultSet, json: bool) -> Result<()> {
    for (index, number) in results.numbers.iter().enumerate() {
        if json {
            let record = HeadlessRecord {
                index,
                number: number.as_str(),
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            writeln!(out, "{}", number)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Fail on the first number that does not match `country`'s shape
pub fn verify_shape(country: &CountryPhoneFormat, results: &ResultSet) -> Result<()> {
    match results
        .numbers
        .iter()
        .position(|n| !country.matches(n.as_str()))
    {
        Some(index) => Err(Error::generation_failure(
            &country.name,
            format!(
                "number {} ({}) does not match the {} shape",
                index, results.numbers[index], country.dial_code
            ),
        )),
        None => Ok(()),
    }
}

/// One `--list-countries` row: `id  flag  name  code`
pub fn country_row(country: &CountryPhoneFormat) -> String {
    format!(
        "{:<4}{}  {:<28}{}",
        country.id, country.flag, country.name, country.dial_code
    )
}
