//! Error taxonomy for the cross engine
//!
//! Errors are values: every failed action yields exactly one `E` record
//! and mutates nothing. The `Display` strings below are the verbatim
//! wire messages.

use thiserror::Error;

/// Errors produced while tokenizing and validating an action line
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Action character not in {O, X, P}
    #[error("Incorrect action character")]
    BadAction,

    /// Side character not in {B, S}
    #[error("Incorrect side character")]
    BadSide,

    /// Symbol empty, longer than 8 characters, or non-alphanumeric
    #[error("Invalid symbol")]
    BadSymbol,

    /// Wrong field count or an unparseable number
    #[error("Malformed input")]
    Malformed,
}

/// Errors produced by book and index state checks
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookError {
    /// The oid was already accepted once, whatever its prior fate
    #[error("Duplicate order id")]
    DuplicateOid,

    /// Cancel referenced an oid that is not currently open
    #[error("Order not found")]
    UnknownOid,
}

/// Top-level engine error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Book(#[from] BookError),
}
