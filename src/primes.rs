//! # Primes — Random Prime and Key Generation for the Driver
//!
//! The core engine only consumes a ready-made `p`/`K`; this module is the
//! Driver's way of manufacturing them when the CLI is run without an
//! explicit prime: random-bit-count candidate generation plus a GMP
//! Miller-Rabin screen. A direct sieve table is pointless once candidates
//! run into the hundreds of bits, so this draws candidates directly from
//! `rand::thread_rng` instead.

use rand::Rng;
use rug::integer::IsPrime;
use rug::Integer;

const PRIMALITY_ROUNDS: u32 = 40;

/// Draw a random prime with exactly `bits` bits (top and bottom bit set, so
/// it is odd and has no leading zero bits). `bits` must be >= 2.
pub fn random_prime(bits: u32) -> Integer {
    assert!(bits >= 2, "a prime needs at least 2 bits");
    loop {
        let candidate = random_odd_integer(bits);
        if candidate.is_probably_prime(PRIMALITY_ROUNDS) != IsPrime::No {
            return candidate;
        }
    }
}

fn random_odd_integer(bits: u32) -> Integer {
    let mut n = random_bits(bits);
    n.set_bit(bits - 1, true);
    n.set_bit(0, true);
    n
}

fn random_bits(bits: u32) -> Integer {
    let mut n = Integer::new();
    let mut rng = rand::thread_rng();
    for i in 0..bits {
        if rng.gen::<bool>() {
            n.set_bit(i, true);
        }
    }
    n
}

/// Draw a uniformly random key in `[0, p)`, arbitrary-precision throughout
/// so primes up to and beyond 256 bits (spec.md §6's CLI accepts
/// `security_bits` up to 256) draw from the full key space rather than a
/// `u64`-truncated one. Uses rejection sampling on `p`'s own bit length:
/// draw that many random bits and retry if the result lands >= p, which
/// keeps the distribution uniform over `[0, p)`.
pub fn random_key(p: &Integer) -> Integer {
    if *p <= 1 {
        return Integer::new();
    }
    let bits = p.significant_bits();
    loop {
        let candidate = random_bits(bits);
        if candidate < *p {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_prime_has_requested_bit_length() {
        for &bits in &[8u32, 16, 40] {
            let p = random_prime(bits);
            assert_eq!(p.significant_bits(), bits, "bits={}", bits);
            assert!(p.is_odd());
            assert_ne!(p.is_probably_prime(PRIMALITY_ROUNDS), IsPrime::No);
        }
    }

    #[test]
    fn random_key_is_within_bound() {
        let p = Integer::from(1009);
        for _ in 0..100 {
            let k = random_key(&p);
            assert!(k < p);
        }
    }

    #[test]
    fn random_key_of_one_is_zero() {
        assert_eq!(random_key(&Integer::from(1)), 0);
    }

    #[test]
    fn random_key_spans_primes_wider_than_u64() {
        // Smallest prime >= 2^200; random_key must not silently truncate
        // the draw to a u64-sized key space.
        let mut p = Integer::from(1u32) << 200u32;
        while p.is_probably_prime(PRIMALITY_ROUNDS) == IsPrime::No {
            p += 2u32;
        }
        for _ in 0..20 {
            let k = random_key(&p);
            assert!(k < p);
            assert!(k >= 0);
        }
    }
}
