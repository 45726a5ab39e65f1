//! Debouncer — timer/cancel primitive guarding one in-flight logical query
//! per input field.
//!
//! Each trigger bumps a generation counter and sleeps the quiet period; it
//! survives only if no newer trigger arrived while it slept. The caller
//! issues its query only for a surviving trigger, bounding query volume
//! under rapid typing. Superseded triggers are not cancelled mid-flight,
//! they just report that they lost.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default quiet period for search and autocomplete inputs.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(350);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET_PERIOD)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a trigger and wait out the quiet period. Returns `true` iff
    /// this trigger is still the latest one — the caller should run its
    /// query exactly when this returns `true`.
    pub async fn trigger(&self) -> bool {
        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        self.generation.load(Ordering::SeqCst) == token
    }

    /// Invalidate any trigger currently waiting, without starting a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Tests
// ============================================================================
