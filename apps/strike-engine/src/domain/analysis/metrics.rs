//! Per-strike metric computation.
//!
//! For each normalized chain row, prices the contract at the projected target
//! level and at the stop-loss level, then derives cost-normalized
//! profit/loss percentages and the capital-efficiency ranking key.

use serde::Serialize;

use super::chain::ChainRow;
use crate::domain::pricing::{OptionSide, PricingInput, price_and_greeks};

/// Request-scoped parameters shared by every strike evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// Projected favorable underlying level.
    pub target: f64,
    /// Projected adverse (stop-loss) underlying level.
    pub stop_loss: f64,
    /// Year-fraction time-to-expiry as of the projected hit time.
    pub time_to_expiry: f64,
    /// Annualized risk-free rate.
    pub rate: f64,
    /// Contracts per lot.
    pub lot_size: f64,
    /// Option side.
    pub side: OptionSide,
}

/// Derived metrics for one strike.
///
/// Built once per strike per request and never mutated; ordering among rows
/// is meaningful only after ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrikeMetrics {
    /// Strike price.
    pub strike: f64,
    /// Last traded premium.
    pub last_price: f64,
    /// Projected premium if the target level is hit.
    pub target_value: f64,
    /// Projected premium if the stop-loss level is hit.
    pub stop_loss_value: f64,
    /// Delta at the target level.
    pub delta: f64,
    /// Gamma at the target level.
    pub gamma: f64,
    /// Projected gain as a percentage of capital per lot.
    pub profit_percent: f64,
    /// Projected give-back at the stop as a percentage of capital per lot.
    pub loss_percent: f64,
    /// Projected profit per unit of capital deployed (ranking key).
    pub efficiency: f64,
}

/// Compute metrics for every strike that can anchor a percentage computation.
///
/// Strikes whose `last_price * lot_size` is not strictly positive are skipped
/// entirely: there is no capital base to normalize against.
#[must_use]
pub fn compute_metrics(rows: &[ChainRow], params: ProjectionParams) -> Vec<StrikeMetrics> {
    let mut metrics = Vec::with_capacity(rows.len());

    for row in rows {
        let capital_per_lot = row.last_price * params.lot_size;
        if capital_per_lot <= 0.0 {
            tracing::debug!(strike = row.strike, "skipping strike with no traded premium");
            continue;
        }

        let at_target = price_and_greeks(PricingInput {
            spot: params.target,
            strike: row.strike,
            time_to_expiry: params.time_to_expiry,
            rate: params.rate,
            sigma: row.volatility_proxy,
            side: params.side,
        });
        // Sensitivities at the stop-loss level are not retained.
        let at_stop = price_and_greeks(PricingInput {
            spot: params.stop_loss,
            strike: row.strike,
            time_to_expiry: params.time_to_expiry,
            rate: params.rate,
            sigma: row.volatility_proxy,
            side: params.side,
        });

        let gain_per_lot = (at_target.fair_value - row.last_price) * params.lot_size;
        let give_back_per_lot = (row.last_price - at_stop.fair_value) * params.lot_size;

        metrics.push(StrikeMetrics {
            strike: row.strike,
            last_price: row.last_price,
            target_value: at_target.fair_value,
            stop_loss_value: at_stop.fair_value,
            delta: at_target.delta,
            gamma: at_target.gamma,
            profit_percent: gain_per_lot / capital_per_lot * 100.0,
            loss_percent: give_back_per_lot / capital_per_lot * 100.0,
            efficiency: (at_target.fair_value - row.last_price) / capital_per_lot,
        });
    }

    metrics
}
