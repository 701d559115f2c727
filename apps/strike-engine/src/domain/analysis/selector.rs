//! Shortlist selection.
//!
//! Keeps only directionally consistent strikes (projected to gain at the
//! target *and* lose at the stop), ranks them by capital efficiency, and
//! truncates to a bounded shortlist. An empty shortlist is a valid outcome.

use super::metrics::StrikeMetrics;

/// Maximum number of recommended strikes returned per request.
pub const SHORTLIST_CAP: usize = 5;

/// Filter, rank, and truncate the per-strike metrics.
///
/// The caller keeps the full metrics slice; this returns only the shortlist,
/// sorted by descending efficiency.
#[must_use]
pub fn select_shortlist(metrics: &[StrikeMetrics]) -> Vec<StrikeMetrics> {
    let mut shortlist: Vec<StrikeMetrics> = metrics
        .iter()
        .filter(|m| m.profit_percent > 0.0 && m.loss_percent > 0.0)
        .copied()
        .collect();

    shortlist.sort_by(|a, b| b.efficiency.total_cmp(&a.efficiency));
    shortlist.truncate(SHORTLIST_CAP);
    shortlist
}
