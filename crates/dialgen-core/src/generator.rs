//! Phone number synthesis
//!
//! Turns a [`CountryPhoneFormat`] and a requested count into a [`ResultSet`]
//! of formatted numbers. Validation happens before the first draw, so a
//! failed request never yields a partial list.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::country::CountryPhoneFormat;
use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Smallest count a single request may ask for.
pub const MIN_COUNT: u32 = 1;

/// Largest count a single request may ask for.
pub const MAX_COUNT: u32 = 10_000;

/// One synthesized, formatted phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedNumber(String);

impl GeneratedNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GeneratedNumber {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for GeneratedNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Numbers produced by one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSet {
    /// Identifier of the country the numbers were generated for
    pub country_id: String,

    /// Display name of that country (used for export filenames)
    pub country_name: String,

    /// Numbers in draw order
    pub numbers: Vec<GeneratedNumber>,

    /// When the request completed
    pub generated_at: DateTime<Utc>,
}

impl ResultSet {
    pub fn new(
        country: &CountryPhoneFormat,
        numbers: Vec<GeneratedNumber>,
        generated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            country_id: country.id.clone(),
            country_name: country.name.clone(),
            numbers,
            generated_at,
        }
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GeneratedNumber> {
        self.numbers.get(index)
    }

    /// All numbers joined with `\n`, no trailing newline.
    pub fn join_lines(&self) -> String {
        join_lines(&self.numbers)
    }
}

/// Join numbers with `\n`, no trailing newline.
pub fn join_lines(numbers: &[GeneratedNumber]) -> String {
    let mut out = String::with_capacity(numbers.iter().map(|n| n.0.len() + 1).sum());
    for (i, number) in numbers.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(number.as_str());
    }
    out
}

/// Parse user input into a request count.
///
/// Accepts a plain decimal integer in `[MIN_COUNT, MAX_COUNT]` with optional
/// surrounding whitespace. Signs, fractions and trailing text are rejected.
pub fn parse_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::invalid_count(input));
    }

    let count: u32 = trimmed.parse().map_err(|_| Error::invalid_count(input))?;
    validate_count(count).map_err(|_| Error::invalid_count(input))
}

/// Check an already-numeric count against the allowed range.
pub fn validate_count(count: u32) -> Result<u32> {
    if (MIN_COUNT..=MAX_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(Error::invalid_count(count.to_string()))
    }
}

/// Synthesize one national number body for a country.
fn synthesize_body<R: RandomSource + ?Sized>(country: &CountryPhoneFormat, rng: &mut R) -> String {
    let rule = &country.rule;
    let mut body = String::with_capacity(rule.length);

    if !rule.prefixes.is_empty() {
        let index = rng.next_below(rule.prefixes.len());
        body.push_str(&rule.prefixes[index]);
    }

    while body.len() < rule.length {
        body.push(char::from(b'0' + rng.next_digit()));
    }

    body
}

/// Generate `count` formatted numbers for `country`.
///
/// Fails without drawing when the count is out of range or the country's
/// rule is malformed.
pub fn generate_numbers<R: RandomSource + ?Sized>(
    country: &CountryPhoneFormat,
    count: u32,
    rng: &mut R,
) -> Result<Vec<GeneratedNumber>> {
    validate_count(count)?;
    country
        .validate()
        .map_err(|e| Error::generation_failure(&country.name, e.to_string()))?;

    let numbers = (0..count)
        .map(|_| {
            let body = synthesize_body(country, rng);
            GeneratedNumber(country.format_number(&body))
        })
        .collect();

    Ok(numbers)
}

/// Generate a complete [`ResultSet`] stamped with the current time.
pub fn generate<R: RandomSource + ?Sized>(
    country: &CountryPhoneFormat,
    count: u32,
    rng: &mut R,
) -> Result<ResultSet> {
    let numbers = generate_numbers(country, count, rng)?;
    tracing::debug!(
        "Generated {} numbers for {} ({})",
        numbers.len(),
        country.name,
        country.dial_code
    );
    Ok(ResultSet::new(country, numbers, Utc::now()))
}
