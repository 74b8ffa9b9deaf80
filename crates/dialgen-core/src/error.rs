//! Application error types with rich context

use thiserror::Error;

use crate::generator::{MAX_COUNT, MIN_COUNT};

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Generation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("enter a number between {min} and {max} (got {input:?})", min = MIN_COUNT, max = MAX_COUNT)]
    InvalidCount { input: String },

    #[error("generation failed, please retry ({country}: {reason})")]
    GenerationFailure { country: String, reason: String },

    #[error("Malformed number rule for {country}: {reason}")]
    MalformedRule { country: String, reason: String },

    #[error("Unknown country: {query}")]
    UnknownCountry { query: String },

    // ─────────────────────────────────────────────────────────────
    // Platform Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn invalid_count(input: impl Into<String>) -> Self {
        Self::InvalidCount {
            input: input.into(),
        }
    }

    pub fn generation_failure(country: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::GenerationFailure {
            country: country.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed_rule(country: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRule {
            country: country.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_country(query: impl Into<String>) -> Self {
        Self::UnknownCountry {
            query: query.into(),
        }
    }

    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard {
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Short user-facing text for the status line.
    ///
    /// Validation and generation failures have fixed prompts; everything else
    /// falls back to the display message.
    pub fn user_message(&self) -> String {
        match self {
            Error::InvalidCount { .. } => {
                format!("enter a number between {} and {}", MIN_COUNT, MAX_COUNT)
            }
            Error::GenerationFailure { .. } | Error::MalformedRule { .. } => {
                "generation failed, please retry".to_string()
            }
            other => other.to_string(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::InvalidCount { .. }
                | Error::GenerationFailure { .. }
                | Error::MalformedRule { .. }
                | Error::UnknownCountry { .. }
                | Error::Clipboard { .. }
                | Error::Export { .. }
        )
    }
}
