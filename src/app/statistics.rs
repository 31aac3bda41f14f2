//! End-of-run statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorKind, ResolutionStats};

/// Prints per-outcome attempt counts to the log.
///
/// Counts are per attempt. The files written at the end hold distinct lines,
/// so they can be shorter than these totals.
pub fn print_resolution_statistics(stats: &ResolutionStats, elapsed_seconds: f64) {
    let resolved = stats.resolved_count();
    let failed = stats.total_errors();
    let attempted = resolved + failed;

    info!(
        "Attempted {} URL{} in {:.1}s: {} resolved, {} failed",
        attempted,
        if attempted == 1 { "" } else { "s" },
        elapsed_seconds,
        resolved,
        failed
    );

    if failed > 0 {
        info!("Error Counts ({} total):", failed);
        for kind in ErrorKind::iter() {
            let count = stats.get_error_count(kind);
            if count > 0 {
                info!("   {}: {}", kind.as_str(), count);
            }
        }
    }
}
