//! # Driver — Build p/H/K0, Run Both Engines, Verify Agreement
//!
//! The only component in this crate that is allowed to fail "softly" from
//! the caller's point of view (`main` turns a `WrongResult` into a non-zero
//! exit code) — everywhere else `SearchError` means a precondition was
//! violated before any work started.

use std::sync::atomic::AtomicBool;

use rug::Integer;

use crate::engine::{bitmap_engine, set_engine};
use crate::error::SearchError;
use crate::hint::HintStream;
use crate::oracle::SymbolOracle;
use crate::primes;
use crate::progress::Progress;

pub struct DriverReport {
    pub p: Integer,
    pub key: Integer,
    pub k0: Integer,
    pub confidence_bits: usize,
    pub recovered: Integer,
}

/// Generate a random `security_bits`-bit prime and a random key in `[0, p)`,
/// build the hint, run both engine variants, and verify they agree with the
/// planted key. `keyspace_bits`, when given, narrows the search start to
/// `max(0, key - 2^keyspace_bits)` instead of starting cold at 0.
pub fn run(
    security_bits: u32,
    stream_length: usize,
    keyspace_bits: Option<u32>,
) -> Result<DriverReport, SearchError> {
    let p = primes::random_prime(security_bits);
    let key = primes::random_key(&p);
    tracing::info!(security_bits, stream_length, ?keyspace_bits, %p, %key, "driver: generated instance");
    run_with(p, key, stream_length, keyspace_bits)
}

/// Same as [`run`], but against a caller-supplied `p` and `key` — the entry
/// point scenario tests and the CLI's explicit-prime path use directly.
/// `key` and the derived `K0` are arbitrary-precision throughout, since the
/// CLI accepts primes up to 256 bits and a `u64`-bounded key would silently
/// truncate the recoverable key space for anything wider than 64 bits.
pub fn run_with(
    p: Integer,
    key: Integer,
    stream_length: usize,
    keyspace_bits: Option<u32>,
) -> Result<DriverReport, SearchError> {
    let oracle = SymbolOracle::new(p.clone())?;
    let hint = HintStream::generate(&oracle, &key, stream_length);
    let confidence_bits = stream_length.min(100);
    let k0 = match keyspace_bits {
        Some(bits) => {
            let window = Integer::from(1u32) << bits;
            if key > window {
                Integer::from(&key - &window)
            } else {
                Integer::new()
            }
        }
        None => Integer::new(),
    };

    let progress = Progress::new();
    let reporter = progress.start_reporter();
    let cancel = AtomicBool::new(false);

    let v2 = set_engine::search(&oracle, &hint, k0.clone(), confidence_bits, &progress, &cancel)?;
    let v3 = bitmap_engine::search(&oracle, &hint, k0.clone(), confidence_bits, &progress, &cancel)?;

    progress.stop();
    let _ = reporter.join();

    if v2 != v3 {
        return Err(SearchError::WrongResult { expected: v2, got: v3 });
    }
    if v2 != key {
        return Err(SearchError::WrongResult { expected: key, got: v2 });
    }

    tracing::info!(%key, recovered = %v2, outer_steps = %progress.outer_steps.load(std::sync::atomic::Ordering::Relaxed), "driver: verified");

    Ok(DriverReport {
        p,
        key,
        k0,
        confidence_bits,
        recovered: v2,
    })
}
