//! Resolution engine.
//!
//! Drives a run: normalize every input line, collapse duplicates, resolve
//! each unique URL exactly once through the request gate, and collect the
//! outcomes into a deduplicated `ResultSet`.

mod result_set;

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use log::{debug, warn};

use crate::app::{log_progress, normalize_domain};
use crate::error_handling::{ResolutionError, ResolutionStats};
use crate::rate_limiter::RequestGate;
use crate::resolve::Resolve;

pub use result_set::ResultSet;

/// Normalizes input lines and groups them by normalized URL.
///
/// Keys are the unique URLs to resolve, in sorted order; values are the raw
/// lines that normalized to each of them.
pub fn normalize_all<I, S>(lines: I) -> BTreeMap<String, BTreeSet<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut targets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for line in lines {
        let raw = line.as_ref();
        targets
            .entry(normalize_domain(raw))
            .or_default()
            .insert(raw.to_string());
    }
    targets
}

/// Orchestrates resolution of a whole input list.
///
/// A failed URL never stops the run. With a concurrency of 1 URLs are
/// resolved strictly one after another in sorted order; above 1, up to that
/// many attempts are in flight and the shared gate bounds their combined rate.
pub struct ResolutionEngine<R> {
    resolver: R,
    gate: Arc<dyn RequestGate>,
    concurrency: usize,
    stats: Arc<ResolutionStats>,
}

impl<R: Resolve> ResolutionEngine<R> {
    /// Creates a sequential engine; see `with_concurrency`.
    pub fn new(resolver: R, gate: Arc<dyn RequestGate>) -> Self {
        Self {
            resolver,
            gate,
            concurrency: 1,
            stats: Arc::new(ResolutionStats::new()),
        }
    }

    /// Sets how many URLs may be in flight at once (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Per-attempt counters accumulated by `run`.
    pub fn stats(&self) -> &Arc<ResolutionStats> {
        &self.stats
    }

    /// Resolves every unique normalized URL in `lines` once.
    pub async fn run<I, S>(&self, lines: I) -> ResultSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let targets = normalize_all(lines);
        let total = targets.len();

        let mut results = ResultSet::new();
        let mut outcomes = stream::iter(targets.iter().enumerate())
            .map(move |(index, (url, sources))| async move {
                (self.attempt(index + 1, total, url).await, sources)
            })
            .buffer_unordered(self.concurrency);

        while let Some((outcome, sources)) = outcomes.next().await {
            results.record(outcome, sources);
        }
        results
    }

    /// One gated resolution attempt.
    async fn attempt(
        &self,
        index: usize,
        total: usize,
        url: &str,
    ) -> Result<String, ResolutionError> {
        log_progress(index, total, url);

        self.gate.acquire().await;
        let outcome = self.resolver.resolve(url).await;
        self.gate.complete().await;

        match &outcome {
            Ok(resolved) => {
                self.stats.record_resolved();
                debug!("Resolved {url} -> {resolved}");
            }
            Err(err) => {
                self.stats.record_error(err);
                warn!("{err}");
            }
        }
        outcome
    }
}
