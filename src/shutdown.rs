//! Process-wide interrupt flag.
//! The Ctrl-C handler sets it; the byte copier checks it between chunks and the pager
//! after each pause, so a running command stops at the next safe point.

use std::sync::atomic::{AtomicBool, Ordering};

static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Record an interrupt. Returns true if one was already pending (second Ctrl-C).
#[inline]
pub fn request() -> bool {
    SHUTDOWN.swap(true, Ordering::Relaxed)
}

#[inline]
pub fn is_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

