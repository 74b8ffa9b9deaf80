//! # dialgen-core - Core Domain Types
//!
//! Foundation crate for dialgen. Provides the country table, number
//! synthesis, country search, pagination and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, rand, tracing).
//!
//! ## Public API
//!
//! ### Countries (`country`, `countries`, `directory`)
//! - [`CountryPhoneFormat`] - Dialing code plus national number shape
//! - [`NumberRule`] - Length, leading digits and display grouping
//! - [`CountryDirectory`] - Ordered country list with substring search
//!
//! ### Generation (`generator`, `random`)
//! - [`generate()`] - Produce a [`ResultSet`] for a country and count
//! - [`parse_count()`] - Validate user-entered counts
//! - [`RandomSource`] - Randomness seam, with [`RngSource`] and [`SequenceSource`]
//!
//! ### Pagination (`pagination`)
//! - [`Pager`] - Page cursor with clamped navigation
//! - [`paginate()`] - Split a slice into fixed-size pages
//!
//! ### Export (`export`)
//! - [`suggested_file_name()`] - `{country}_{count}_{millis}.txt`
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use dialgen_core::prelude::*;
//! ```

pub mod countries;
pub mod country;
pub mod directory;
pub mod error;
pub mod export;
pub mod generator;
pub mod logging;
pub mod pagination;
pub mod random;

/// Prelude for common imports used throughout all dialgen crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use country::{CountryPhoneFormat, NumberRule, MAX_NUMBER_LENGTH, MIN_NUMBER_LENGTH};
pub use directory::CountryDirectory;
pub use error::{Error, Result};
pub use export::{export_content, file_name_for, sanitize_file_component, suggested_file_name};
pub use generator::{
    generate, generate_numbers, join_lines, parse_count, validate_count, GeneratedNumber,
    ResultSet, MAX_COUNT, MIN_COUNT,
};
pub use pagination::{page_count, paginate, Pager, COUNTRY_PAGE_SIZE, RESULT_PAGE_SIZE};
pub use random::{RandomSource, RngSource, SequenceSource};
