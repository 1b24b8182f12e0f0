//! # Progress — Atomic Search Progress Counters
//!
//! Thread-safe progress tracking shared between the (single-threaded) search
//! engine and a background status reporter thread. Atomics for lock-free
//! counter updates, a Mutex only for the current-anchor string (updated once
//! per outer step, not per candidate).
//!
//! ## Background Reporter
//!
//! A dedicated thread prints progress to stderr every 20 seconds of wall
//! time: outer steps taken, symbols computed vs. reused, rate, and the
//! current anchor. Shuts down cleanly via the `shutdown` atomic flag,
//! mirroring the engine's own cooperative cancellation flag.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use rug::Integer;

const REPORT_INTERVAL: Duration = Duration::from_secs(20);

pub struct Progress {
    pub outer_steps: AtomicU64,
    pub symbols_computed: AtomicU64,
    pub symbols_reused: AtomicU64,
    pub current: Mutex<String>,
    start: Instant,
    shutdown: AtomicBool,
}

impl Progress {
    pub fn new() -> Arc<Self> {
        Arc::new(Progress {
            outer_steps: AtomicU64::new(0),
            symbols_computed: AtomicU64::new(0),
            symbols_reused: AtomicU64::new(0),
            current: Mutex::new(String::new()),
            start: Instant::now(),
            shutdown: AtomicBool::new(false),
        })
    }

    /// Record the anchor in effect for the outer step currently starting.
    pub fn report_anchor(&self, c: &Integer) {
        self.outer_steps.fetch_add(1, Ordering::Relaxed);
        *self.current.lock().unwrap() = format!("anchor={}", c);
    }

    pub fn start_reporter(self: &Arc<Self>) -> thread::JoinHandle<()> {
        let progress = Arc::clone(self);
        thread::spawn(move || loop {
            thread::sleep(REPORT_INTERVAL);
            if progress.shutdown.load(Ordering::Relaxed) {
                break;
            }
            progress.print_status();
        })
    }

    pub fn print_status(&self) {
        let elapsed = self.start.elapsed();
        let computed = self.symbols_computed.load(Ordering::Relaxed);
        let reused = self.symbols_reused.load(Ordering::Relaxed);
        let steps = self.outer_steps.load(Ordering::Relaxed);
        let current = self.current.lock().unwrap().clone();
        let rate = if elapsed.as_secs() > 0 {
            computed as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };
        let h = elapsed.as_secs() / 3600;
        let m = (elapsed.as_secs() % 3600) / 60;
        let s = elapsed.as_secs() % 60;
        eprintln!(
            "[{:02}:{:02}:{:02}] {} | steps: {} | symbols: {} computed, {} reused | {:.2}/s",
            h, m, s, current, steps, computed, reused, rate
        );
    }

    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }
}
