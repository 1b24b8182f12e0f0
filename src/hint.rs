//! # HintStream — Immutable Observed PRG Output
//!
//! A fixed-length, read-only bit sequence: the attacker's observed prefix of
//! the Legendre PRG. Packed little-endian within `u64` words (bit 0 of word 0
//! is logical index 0) — cheap storage, cheap random access, no endianness
//! leaking through the public API.

use crate::error::SearchError;
use crate::oracle::SymbolOracle;
use crate::prng;
use rug::Integer;

pub struct HintStream {
    words: Vec<u64>,
    len: usize,
}

impl HintStream {
    /// Build a hint from an explicit bit sequence.
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut words = vec![0u64; bits.len().div_ceil(64)];
        for (i, &b) in bits.iter().enumerate() {
            if b {
                words[i / 64] |= 1u64 << (i % 64);
            }
        }
        HintStream { words, len: bits.len() }
    }

    /// Generate the ground-truth hint for key `key` against prime `p`:
    /// `H[i] = bit(key + i, p)` for `i` in `0..length`, via `prng::generate`.
    pub fn generate(oracle: &SymbolOracle, key: &Integer, length: usize) -> Self {
        Self::from_bits(&prng::generate(oracle, key, length))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// `H[i]`, for `0 <= i < len()`.
    pub fn get(&self, i: usize) -> Result<bool, SearchError> {
        if i >= self.len {
            return Err(SearchError::OutOfBounds { index: i, len: self.len });
        }
        Ok(self.words[i / 64] & (1u64 << (i % 64)) != 0)
    }

    /// `H[L-1], H[L-2], ..., H[L-count]` — the trailing `count` bits in
    /// reverse order, where `L = len() - from_end_exclusive`. Used by the
    /// bitmap engine to build per-symbol masks without walking the whole
    /// stream bit by bit.
    pub fn slice_reverse(&self, from_end_exclusive: usize, count: usize) -> Result<Vec<bool>, SearchError> {
        if from_end_exclusive + count > self.len {
            return Err(SearchError::OutOfBounds {
                index: from_end_exclusive + count,
                len: self.len,
            });
        }
        let top = self.len - from_end_exclusive;
        let mut out = Vec::with_capacity(count);
        for k in 0..count {
            out.push(self.get(top - 1 - k)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rug::Integer;

    #[test]
    fn from_bits_roundtrip() {
        let bits = [true, false, true, true, false];
        let h = HintStream::from_bits(&bits);
        assert_eq!(h.len(), 5);
        for (i, &b) in bits.iter().enumerate() {
            assert_eq!(h.get(i).unwrap(), b);
        }
    }

    #[test]
    fn get_out_of_bounds() {
        let h = HintStream::from_bits(&[true, false]);
        assert!(h.get(2).is_err());
    }

    #[test]
    fn slice_reverse_basic() {
        // H = [0,1,1,0,1] (index 0..5)
        let h = HintStream::from_bits(&[false, true, true, false, true]);
        // slice_reverse(0, 3) = H[4], H[3], H[2] = [1,0,1]
        let s = h.slice_reverse(0, 3).unwrap();
        assert_eq!(s, vec![true, false, true]);
        // slice_reverse(1, 2) = H[3], H[2] = [0,1]
        let s2 = h.slice_reverse(1, 2).unwrap();
        assert_eq!(s2, vec![false, true]);
    }

    #[test]
    fn slice_reverse_full_length() {
        let bits = [true, false, false, true, true, false, true];
        let h = HintStream::from_bits(&bits);
        let rev = h.slice_reverse(0, bits.len()).unwrap();
        let expected: Vec<bool> = bits.iter().rev().copied().collect();
        assert_eq!(rev, expected);
    }

    #[test]
    fn slice_reverse_out_of_bounds() {
        let h = HintStream::from_bits(&[true, true, true]);
        assert!(h.slice_reverse(1, 3).is_err());
    }

    #[test]
    fn generate_matches_oracle_bit() {
        let oracle = SymbolOracle::new(Integer::from(23)).unwrap();
        let h = HintStream::generate(&oracle, &Integer::from(7), 16);
        for i in 0..16u64 {
            let expected = oracle.bit(&Integer::from(7 + i));
            assert_eq!(h.get(i as usize).unwrap(), expected);
        }
    }
}
