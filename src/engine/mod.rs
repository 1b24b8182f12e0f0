//! # SearchEngine — shared contract for the two engine variants
//!
//! Both [`set_engine`] and [`bitmap_engine`] implement the same
//! `search(p, H, K0, confidence_bits) -> K` contract: advance a
//! monotonically non-decreasing anchor `c` through the integers, prune a
//! candidate window against the observed hint, and return the unique
//! survivor at offset 0. They differ only in how the candidate window is
//! represented (`BTreeSet<Integer>` vs. a second `CyclicBitmap`) and in how
//! symbol reuse across anchors is bookkept.
//!
//! Cancellation is cooperative: both variants check `cancel` at the top of
//! every outer step and, if set, return the current anchor immediately —
//! not necessarily confirmed to `confidence_bits`, since the caller asked to
//! stop before that could happen.

pub mod bitmap_engine;
pub mod set_engine;

use std::sync::atomic::{AtomicBool, Ordering};

pub(crate) fn cancel_requested(cancel: &AtomicBool) -> bool {
    cancel.load(Ordering::Relaxed)
}
