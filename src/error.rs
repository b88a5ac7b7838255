//! # Error Types
//!
//! This module defines the error type shared by every stage of a shift search:
//! loading the hours table, validating options, scoring genomes and breeding.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use shiftga::error::{GeneticError, Result};
//!
//! fn check_lengths(genome_len: usize, columns: usize) -> Result<()> {
//!     if genome_len != columns {
//!         return Err(GeneticError::LengthMismatch {
//!             expected: columns,
//!             actual: genome_len,
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_lengths(4, 4).is_ok());
//! assert!(check_lengths(3, 4).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use shiftga::error::{GeneticError, OptionExt};
//!
//! fn best_score(scores: &[u64]) -> shiftga::error::Result<u64> {
//!     scores.iter().max().cloned().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(best_score(&[3, 9, 1]).unwrap(), 9);
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while searching for a shift selection.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Two sequences that must line up do not: a genome against the hours
    /// table, two crossover parents, or a fitness vector against its population.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A fitness value cannot be represented, e.g. the summed means overflow.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// The hours table is malformed: ragged, empty, or holding values that are
    /// not non-negative integers.
    #[error("Ingestion error: {0}")]
    Ingestion(String),

    /// Error that occurs when an I/O operation fails.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by the CSV reader.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for shift search operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use shiftga::error::ResultExt;
/// use std::fs::File;
///
/// fn open_hours(path: &str) -> shiftga::error::Result<()> {
///     File::open(path).context("Failed to open hours table")?;
///     Ok(())
/// }
///
/// assert!(open_hours("/definitely/not/here.csv").is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Converts the error to a `GeneticError::Other` prefixed with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
