//! # Error — Typed Failure Modes of the Search Core
//!
//! The engine and its collaborators (`CyclicBitmap`, `SymbolOracle`) have no
//! recoverable error states: every kind here is a fatal precondition
//! violation or a correctness regression. `Driver`/CLI code wraps these in
//! `anyhow` at the boundary; internally they are a plain enum so callers can
//! match on the specific kind in tests.

use std::fmt;

use rug::Integer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Raised once, at oracle construction, if p is even, < 3, or composite.
    InvalidPrime,
    /// A `CyclicBitmap` index fell outside `[0, N)`.
    OutOfBounds { index: usize, len: usize },
    /// `shift(s)` was called with `s > N`.
    InvalidShift { shift: usize, len: usize },
    /// The Driver's post-check found `engine_result != K`.
    WrongResult { expected: Integer, got: Integer },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidPrime => {
                write!(f, "p must be an odd prime >= 3")
            }
            SearchError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            SearchError::InvalidShift { shift, len } => {
                write!(f, "shift {} exceeds length {}", shift, len)
            }
            SearchError::WrongResult { expected, got } => {
                write!(f, "engine returned {}, expected {}", got, expected)
            }
        }
    }
}

impl std::error::Error for SearchError {}
