//! Deduplicated run results with provenance.

use std::collections::{BTreeMap, BTreeSet};

use crate::error_handling::ResolutionError;

/// Distinct resolved URLs and distinct error lines of a run.
///
/// Each output string maps to the raw input lines that produced it, so a
/// result can be traced back to the domains list. Keys are compared by exact
/// string equality and iterate in sorted order, which keeps the written files
/// identical across runs that see the same network answers.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultSet {
    resolved: BTreeMap<String, BTreeSet<String>>,
    errors: BTreeMap<String, BTreeSet<String>>,
}

impl ResultSet {
    /// Empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one URL together with the raw lines behind it.
    pub fn record(
        &mut self,
        outcome: Result<String, ResolutionError>,
        sources: &BTreeSet<String>,
    ) {
        let (bucket, key) = match outcome {
            Ok(url) => (&mut self.resolved, url),
            Err(err) => (&mut self.errors, err.to_string()),
        };
        bucket
            .entry(key)
            .or_default()
            .extend(sources.iter().cloned());
    }

    /// Distinct resolved URLs, sorted.
    pub fn resolved(&self) -> impl Iterator<Item = &str> {
        self.resolved.keys().map(String::as_str)
    }

    /// Distinct error lines, sorted.
    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Number of distinct resolved URLs.
    pub fn resolved_len(&self) -> usize {
        self.resolved.len()
    }

    /// Number of distinct error lines.
    pub fn errors_len(&self) -> usize {
        self.errors.len()
    }

    /// Raw input lines that resolved to `url`.
    pub fn resolved_sources(&self, url: &str) -> Option<&BTreeSet<String>> {
        self.resolved.get(url)
    }

    /// Raw input lines that produced the error line `line`.
    pub fn error_sources(&self, line: &str) -> Option<&BTreeSet<String>> {
        self.errors.get(line)
    }
}
