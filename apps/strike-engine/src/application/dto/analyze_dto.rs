//! Analyze request/response DTOs.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::StrikeMetrics;
use crate::domain::pricing::OptionSide;

/// Inbound analyze request.
///
/// Timestamps arrive as strings and are parsed by the use case so that a
/// malformed value is rejected as `InvalidRequest` before any pricing runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequestDto {
    /// Available capital, in the premium's currency units.
    pub capital: f64,
    /// Contracts per lot.
    pub lot_size: f64,
    /// Option side to analyze.
    pub option_type: OptionSide,
    /// Contract expiry (RFC 3339, or `YYYY-MM-DD` for UTC midnight).
    pub expiry: String,
    /// Decision timestamp (RFC 3339).
    pub decision_time: String,
    /// Projected favorable underlying level, in price units.
    pub spot_target: f64,
    /// Projected adverse (stop-loss) underlying level, in price units.
    pub spot_sl: f64,
    /// Instrument identifier understood by the chain provider.
    pub instrument_key: String,
}

/// Per-strike metrics row at the API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeMetricsDto {
    /// Strike price.
    pub strike: f64,
    /// Last traded premium.
    pub last_price: f64,
    /// Projected premium at the target level.
    pub target_value: f64,
    /// Projected premium at the stop-loss level.
    pub stop_loss_value: f64,
    /// Delta at the target level.
    pub delta: f64,
    /// Gamma at the target level.
    pub gamma: f64,
    /// Projected gain, percent of capital per lot.
    pub profit_percent: f64,
    /// Projected give-back at the stop, percent of capital per lot.
    pub loss_percent: f64,
    /// Profit per unit of capital deployed.
    pub efficiency: f64,
}

impl From<&StrikeMetrics> for StrikeMetricsDto {
    fn from(m: &StrikeMetrics) -> Self {
        Self {
            strike: m.strike,
            last_price: m.last_price,
            target_value: m.target_value,
            stop_loss_value: m.stop_loss_value,
            delta: m.delta,
            gamma: m.gamma,
            profit_percent: m.profit_percent,
            loss_percent: m.loss_percent,
            efficiency: m.efficiency,
        }
    }
}

/// Outbound analyze response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponseDto {
    /// Metrics for every strike that survived the capital-per-lot guard.
    pub computed: Vec<StrikeMetricsDto>,
    /// Ranked shortlist (at most the shortlist cap).
    pub selected: Vec<StrikeMetricsDto>,
}
