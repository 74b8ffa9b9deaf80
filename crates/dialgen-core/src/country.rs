//! Country phone-format descriptors
//!
//! A [`CountryPhoneFormat`] pairs a dialing code with a [`NumberRule`] that
//! describes the shape of a national number: its length, the digit strings it
//! may start with, and how it is grouped for display.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Shortest national number a rule may describe.
pub const MIN_NUMBER_LENGTH: usize = 4;

/// Longest national number a rule may describe (E.164 upper bound).
pub const MAX_NUMBER_LENGTH: usize = 15;

fn dial_code_regex() -> &'static Regex {
    static DIAL_CODE: OnceLock<Regex> = OnceLock::new();
    DIAL_CODE.get_or_init(|| Regex::new(r"^\+[1-9][0-9]{0,3}$").expect("valid dial code regex"))
}

/// Shape of a national phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRule {
    /// Number of digits in the national number (prefix included)
    pub length: usize,

    /// Allowed leading digit strings; empty means any digits
    #[serde(default)]
    pub prefixes: Vec<String>,

    /// Display grouping; empty prints the body ungrouped
    #[serde(default)]
    pub groups: Vec<usize>,
}

impl NumberRule {
    pub fn new(length: usize, prefixes: &[&str], groups: &[usize]) -> Self {
        Self {
            length,
            prefixes: prefixes.iter().map(|p| p.to_string()).collect(),
            groups: groups.to_vec(),
        }
    }

    /// Check the rule is internally consistent.
    ///
    /// Returns a description of the first violated constraint.
    pub fn check(&self) -> std::result::Result<(), String> {
        if !(MIN_NUMBER_LENGTH..=MAX_NUMBER_LENGTH).contains(&self.length) {
            return Err(format!(
                "length {} outside {}..={}",
                self.length, MIN_NUMBER_LENGTH, MAX_NUMBER_LENGTH
            ));
        }

        for prefix in &self.prefixes {
            if prefix.is_empty() {
                return Err("empty prefix".to_string());
            }
            if !prefix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("prefix {:?} contains non-digits", prefix));
            }
            if prefix.len() > self.length {
                return Err(format!(
                    "prefix {:?} longer than number length {}",
                    prefix, self.length
                ));
            }
        }

        if !self.groups.is_empty() {
            if self.groups.contains(&0) {
                return Err("zero-width group".to_string());
            }
            let total: usize = self.groups.iter().sum();
            if total != self.length {
                return Err(format!(
                    "groups sum to {}, expected {}",
                    total, self.length
                ));
            }
        }

        Ok(())
    }

    /// [`check`](Self::check) as an [`Error::MalformedRule`] without a country.
    pub fn validate(&self) -> Result<()> {
        self.check()
            .map_err(|reason| Error::malformed_rule("number rule", reason))
    }

    /// Split a national body into display groups joined by single spaces.
    ///
    /// The body must be `length` ASCII digits.
    pub fn group(&self, body: &str) -> String {
        if self.groups.is_empty() {
            return body.to_string();
        }

        let mut out = String::with_capacity(body.len() + self.groups.len());
        let mut start = 0;
        for (i, width) in self.groups.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let end = (start + width).min(body.len());
            out.push_str(&body[start..end]);
            start = end;
        }
        out
    }

    /// Whether a bare digit string has this rule's length and prefix.
    pub fn accepts(&self, body: &str) -> bool {
        body.len() == self.length
            && body.bytes().all(|b| b.is_ascii_digit())
            && (self.prefixes.is_empty() || self.prefixes.iter().any(|p| body.starts_with(p)))
    }
}

/// One supported country or region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryPhoneFormat {
    /// Stable identifier (ISO 3166-1 alpha-2, lowercase, for built-ins)
    pub id: String,

    /// Display name
    pub name: String,

    /// Flag glyph; derived from `id` when omitted in config
    #[serde(default)]
    pub flag: String,

    /// International dialing code, e.g. `"+1"`
    pub dial_code: String,

    /// National number shape
    pub rule: NumberRule,
}

impl CountryPhoneFormat {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        dial_code: impl Into<String>,
        rule: NumberRule,
    ) -> Self {
        let id = id.into();
        let flag = flag_for(&id);
        Self {
            id,
            name: name.into(),
            flag,
            dial_code: dial_code.into(),
            rule,
        }
    }

    /// Fill in a derived flag if none was given.
    pub fn with_default_flag(mut self) -> Self {
        if self.flag.is_empty() {
            self.flag = flag_for(&self.id);
        }
        self
    }

    /// Validate the dialing code and number rule.
    pub fn validate(&self) -> Result<()> {
        if !dial_code_regex().is_match(&self.dial_code) {
            return Err(Error::malformed_rule(
                &self.name,
                format!("invalid dialing code {:?}", self.dial_code),
            ));
        }
        self.rule
            .check()
            .map_err(|reason| Error::malformed_rule(&self.name, reason))
    }

    /// Render a national body with this country's dialing code and grouping.
    pub fn format_number(&self, body: &str) -> String {
        format!("{} {}", self.dial_code, self.rule.group(body))
    }

    /// Whether a formatted number has this country's shape.
    pub fn matches(&self, number: &str) -> bool {
        let Some(rest) = number.strip_prefix(&self.dial_code) else {
            return false;
        };
        let Some(rest) = rest.strip_prefix(' ') else {
            return false;
        };
        let body = rest.replace(' ', "");
        self.rule.accepts(&body) && self.rule.group(&body) == rest
    }

    /// Single-line label used in lists and the CLI.
    pub fn label(&self) -> String {
        format!("{} {} ({})", self.flag, self.name, self.dial_code)
    }
}

/// Build a flag emoji from a two-letter region identifier.
///
/// Identifiers that are not two ASCII letters get a white flag.
pub fn flag_for(id: &str) -> String {
    let letters: Vec<char> = id.chars().collect();
    if letters.len() != 2 || !letters.iter().all(|c| c.is_ascii_alphabetic()) {
        return "🏳".to_string();
    }

    letters
        .iter()
        .filter_map(|c| {
            let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(0x1F1E6 + offset)
        })
        .collect()
}
