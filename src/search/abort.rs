//! A cloneable, cross-thread cancellation flag.
//!
//! Lazy SMP composition itself is out of scope for this core, but a parallel driver
//! built on top of it needs a way to tell a running `search` call to stop from
//! another thread: a plain `Arc<AtomicBool>`, checked cooperatively rather than used
//! to interrupt anything forcibly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared, cooperative cancellation signal.
#[derive(Clone, Debug, Default)]
pub struct SearchAbortFlag {
    flag: Arc<AtomicBool>,
}

impl SearchAbortFlag {
    pub fn new() -> SearchAbortFlag {
        SearchAbortFlag {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Requests cancellation. Safe to call from any thread holding a clone.
    #[inline]
    pub fn trip(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_tripped(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
