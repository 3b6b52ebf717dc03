//! Error types for pareto-select
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for objective registration failures
///
/// Raised at registry-construction time. The driver must not proceed with
/// an invalid registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Objective name absent from both the observation and the
    /// prior-information catalog
    #[error("objective function not found: {name}")]
    ObjectiveNotFound { name: String },

    /// Direction string does not start with "max" or "min"
    #[error("unrecognized direction for objective {name}: '{direction}'")]
    UnrecognizedDirection { name: String, direction: String },
}

/// Error type for table construction and lookups
///
/// Raised at selection time when a supplied table is missing data a
/// registered objective or constraint requires. Fatal to that generation's
/// selection call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    /// A required column is absent from the table
    #[error("missing column: {column}")]
    MissingColumn { column: String },

    /// A required row is absent from the table
    #[error("missing row: {row}")]
    MissingRow { row: String },

    /// Row arity does not match the table's column count
    #[error("dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Column name repeated at table construction
    #[error("duplicate column: {column}")]
    DuplicateColumn { column: String },

    /// Row identifier repeated at table construction
    #[error("duplicate row: {row}")]
    DuplicateRow { row: String },
}

/// Top-level error type for selection operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Registry construction failed
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A supplied table is missing required data
    #[error("data error: {0}")]
    Data(#[from] DataError),
}

/// Result type alias for selection operations
pub type SelectResult<T> = Result<T, SelectionError>;
