//! Resolution statistics tracking.
//!
//! Counts attempts per outcome so the run can log a per-kind summary. Counts
//! are per attempt, not per distinct output line: two URLs failing with the
//! same message count twice here but appear once in the errors file.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorKind, ResolutionError};

/// Thread-safe resolution statistics tracker.
///
/// Uses atomic counters so concurrent workers can share it behind an `Arc`.
/// All error kinds are initialized to zero on creation.
pub struct ResolutionStats {
    resolved: AtomicUsize,
    errors: HashMap<ErrorKind, AtomicUsize>,
}

impl ResolutionStats {
    /// All counters start at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for kind in ErrorKind::iter() {
            errors.insert(kind, AtomicUsize::new(0));
        }
        ResolutionStats {
            resolved: AtomicUsize::new(0),
            errors,
        }
    }

    /// Counts one successful resolution.
    pub fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts one failure under its kind.
    pub fn record_error(&self, error: &ResolutionError) {
        if let Some(counter) = self.errors.get(&error.kind()) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ResolutionStats initialization.",
                error.kind()
            );
        }
    }

    /// Successful resolutions so far.
    pub fn resolved_count(&self) -> usize {
        self.resolved.load(Ordering::SeqCst)
    }

    /// Get the count for an error kind.
    pub fn get_error_count(&self, kind: ErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Failures across all kinds.
    pub fn total_errors(&self) -> usize {
        ErrorKind::iter().map(|k| self.get_error_count(k)).sum()
    }
}

impl Default for ResolutionStats {
    fn default() -> Self {
        Self::new()
    }
}
