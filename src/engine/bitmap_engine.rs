//! # SearchEngine — bitmap variant (v3)
//!
//! Candidate window kept entirely as a second `CyclicBitmap(L, true)`: bit j
//! means "c + j is still live". Symbol reuse across anchors is implicit in
//! the rotation discipline itself (freshly rotated-in bits default to
//! `true`, so nothing needs an explicit "already queried" cache the way the
//! set variant does). The anchor `c` is arbitrary-precision; `off`/`o` stay
//! bitmap-scale `usize` offsets since they never exceed the window length.

use std::sync::atomic::AtomicBool;

use rug::Integer;

use crate::bitmap::CyclicBitmap;
use crate::engine::cancel_requested;
use crate::error::SearchError;
use crate::hint::HintStream;
use crate::oracle::SymbolOracle;
use crate::progress::Progress;

/// Run the bitmap-based engine to recovery. `confidence_bits` is clamped to
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
    let l = hint.len();
    let confidence_bits = confidence_bits.min(l);

    let mut c = k0;
    let mut candidates = CyclicBitmap::new(l, true);

    loop {
        if cancel_requested(cancel) {
            return Ok(c);
        }
        progress.report_anchor(&c);

        let off = candidates.first(true);
        c += off as u64;
        candidates.shift(off)?;

        let mut eliminated = false;
        for i in 0..confidence_bits {
            let o = l - i - 1;
            let s = oracle.bit(&(Integer::from(&c) + o as u64));
            progress.symbols_computed.fetch_add(1, std::sync::atomic::Ordering::Relaxed);

            let window = l - i;
            let mut mask = hint.slice_reverse(i, window)?;
            if !s {
                for b in mask.iter_mut() {
                    *b = !*b;
                }
            }
            candidates.and_slice(&mask, window)?;

            if !candidates.get(0)? {
                eliminated = true;
                break;
            }
        }

        if !eliminated && candidates.get(0)? {
            return Ok(c);
        }
    }
}
