//! # SymbolOracle — Legendre Symbol Evaluation
//!
//! Wraps `rug::Integer`'s GMP-backed Jacobi/Legendre routine (`mpz_legendre`,
//! reciprocity under the hood) rather than reimplementing reciprocity by
//! hand, the same way this crate already leans on GMP's Miller-Rabin
//! (`is_probably_prime`) for the primality precondition below.

use crate::error::SearchError;
use rug::integer::IsPrime;
use rug::Integer;

/// Miller-Rabin rounds used for the one-time primality precondition check.
/// The engine itself never re-checks p after construction.
const PRIMALITY_ROUNDS: u32 = 40;

pub struct SymbolOracle {
    p: Integer,
}

impl SymbolOracle {
    /// Validate `p` (odd, >= 3, prime) and build an oracle for it. Fails
    /// `InvalidPrime` otherwise. Called once, at search init.
    pub fn new(p: Integer) -> Result<Self, SearchError> {
        if p < 3 || p.is_even() {
            return Err(SearchError::InvalidPrime);
        }
        if p.is_probably_prime(PRIMALITY_ROUNDS) == IsPrime::No {
            return Err(SearchError::InvalidPrime);
        }
        Ok(SymbolOracle { p })
    }

    pub fn p(&self) -> &Integer {
        &self.p
    }

    /// legendre(a, p) ∈ {-1, 0, +1}. `a` may be negative or outside `[0, p)`;
    /// GMP's `mpz_legendre` reduces mod p internally, so no explicit
    /// reduction step is needed here.
    pub fn legendre(&self, a: &Integer) -> i32 {
        a.legendre(&self.p)
    }

    /// `1` iff `legendre(a, p) == +1`, else `0`. The `legendre == 0` case
    /// (only possible when `p | a`) maps to `0` here rather than `1`.
    pub fn bit(&self, a: &Integer) -> bool {
        self.legendre(a) == 1
    }
}
