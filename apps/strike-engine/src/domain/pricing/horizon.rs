//! Time-horizon resolution.
//!
//! The trader's target and stop-loss levels are projections of where the
//! underlying will be some fixed offset after the decision time, so the
//! option is priced as of that projected hit time, not the decision time.

use chrono::{DateTime, TimeDelta, Utc};

/// Milliseconds in a 365-day year, the convention the pricing model expects.
const MILLIS_PER_YEAR: f64 = 365.0 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Year-fraction time-to-expiry as of the projected hit time.
///
/// Computed as `(expiry - (decision_time + offset)) / 365 days`. The result
/// may be zero or negative when the projected hit time is at or past expiry;
/// the pricing model's degenerate branch then applies.
#[must_use]
pub fn year_fraction_to_expiry(
    decision_time: DateTime<Utc>,
    expiry: DateTime<Utc>,
    offset: TimeDelta,
) -> f64 {
    let hit_time = decision_time + offset;
    (expiry - hit_time).num_milliseconds() as f64 / MILLIS_PER_YEAR
}
