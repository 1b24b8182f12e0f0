//! # PRNG — Legendre-Symbol Pseudo-Random Generator
//!
//! The generator under attack: `b_i = (1 + legendre(K+i, p)) / 2` for
//! `i = 0, 1, 2, ...`. The seed offset is fixed at 0 since `Driver` already
//! parameterizes the window lower bound separately via `K0`.

use crate::oracle::SymbolOracle;
use rug::Integer;

/// Emit `length` bits of the PRG output starting at `key`. `key` is taken by
/// reference since it may exceed 64 bits for wide primes.
pub fn generate(oracle: &SymbolOracle, key: &Integer, length: usize) -> Vec<bool> {
    (0..length).map(|i| oracle.bit(&(Integer::from(key) + i as u64))).collect()
}
