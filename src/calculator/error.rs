//! Calculator errors

use thiserror::Error;

/// Errors raised by the calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Invalid headcount '{0}': number of people must be a whole number greater than 0")]
    InvalidHeadcount(String),

    #[error("Unknown format '{0}': expected one of text, markdown, html, list")]
    UnknownFormat(String),

    #[error("{0} name must not be empty")]
    MissingName(&'static str),
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
