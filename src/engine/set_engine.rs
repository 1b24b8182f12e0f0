//! # SearchEngine — set variant (v2)
//!
//! Candidate window kept as an ordered set of absolute key values, plus a
//! `calc_syms` CyclicBitmap recording which offsets relative to the current
//! anchor have already been queried from the oracle this window — shifted
//! (not rebuilt) on every anchor advance so a small `Δ` only invalidates the
//! `Δ` freshly rotated-in offsets.
//!
//! The set-changed-during-iteration hazard is resolved with a plain
//! `BTreeSet<Integer>` clone per symbol: cloning an ordered set and iterating
//! the clone while mutating the original is the direct Rust equivalent of
//! "an ordered container supporting safe in-iteration removal". Candidates
//! and the anchor are arbitrary-precision, matching the key space itself.

use std::collections::BTreeSet;
use std::sync::atomic::AtomicBool;

use rug::Integer;

use crate::bitmap::CyclicBitmap;
use crate::engine::cancel_requested;
use crate::error::SearchError;
use crate::hint::HintStream;
use crate::oracle::SymbolOracle;
use crate::progress::Progress;

/// Run the set-based engine to recovery. `confidence_bits` is clamped to
/// `hint.len()`. Returns the recovered anchor, or the best-known anchor if
/// `cancel` is set before confidence is reached.
pub fn search(
    oracle: &SymbolOracle,
    hint: &HintStream,
    k0: Integer,
    confidence_bits: usize,
    progress: &Progress,
    cancel: &AtomicBool,
) -> Result<Integer, SearchError> {
    let l = hint.len() as u64;
    let confidence_bits = confidence_bits.min(hint.len());

    let mut c = k0.clone();
    let mut candidates: BTreeSet<Integer> = BTreeSet::new();
    let mut v = k0;
    for _ in 0..l {
        candidates.insert(v.clone());
        v += 1;
    }

    let mut calc_syms = CyclicBitmap::new(hint.len(), false);

    loop {
        if cancel_requested(cancel) {
            return Ok(c);
        }
        progress.report_anchor(&c);

        let prev = c.clone();
        c = candidates.iter().next().cloned().unwrap_or_else(|| Integer::from(&prev + l));

        let mut v = Integer::from(&prev + l);
        let upper = Integer::from(&c + l);
        while v < upper {
            candidates.insert(v.clone());
            v += 1;
        }

        let delta = Integer::from(&c - &prev).to_usize().expect("anchor advance fits in usize");
        calc_syms.shift(delta)?;

        let mut eliminated = false;
        for i in 0..confidence_bits as u64 {
            let idx = Integer::from(&c + l) - i;
            let rel_calc = (l - 1 - i) as usize; // = l - 1 - i, independent of c

            if calc_syms.get(rel_calc)? {
                progress.symbols_reused.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                continue;
            }
            calc_syms.set(rel_calc, true)?;
            let s = oracle.bit(&idx);
            progress.symbols_computed.fetch_add(1, std::sync::atomic::Ordering::Relaxed);

            let snapshot = candidates.clone();
            for k in snapshot {
                let rel = Integer::from(&k - &c) + i;
                if rel == 0 {
                    continue;
                }
                if rel > l {
                    break;
                }
                let h_idx = (l - rel.to_u64().expect("rel <= l fits in u64")) as usize;
                if s != hint.get(h_idx)? {
                    candidates.remove(&k);
                }
            }

            if !candidates.contains(&c) {
                eliminated = true;
                break;
            }
        }

        if !eliminated && candidates.contains(&c) {
            return Ok(c);
        }
    }
}
