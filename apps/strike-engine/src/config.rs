//! Engine configuration.
//!
//! The pricing pipeline carries two tunable constants: the annualized
//! risk-free rate used by the Black-Scholes model and the forward-projection
//! offset added to the decision time before computing time-to-expiry. Both
//! were embedded literals in the original service; they are explicit
//! configuration here so scenarios can be tested deterministically.

use chrono::TimeDelta;

/// Default annualized, continuously-compounded risk-free rate (6.5%).
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.065;

/// Default forward-projection offset in minutes (3 hours).
pub const DEFAULT_PROJECTION_OFFSET_MINUTES: i64 = 180;

/// Configuration for the analysis engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Annualized, continuously-compounded risk-free rate.
    pub risk_free_rate: f64,
    /// How far ahead the target/stop-loss levels are expected to be realized.
    pub projection_offset: TimeDelta,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            projection_offset: TimeDelta::minutes(DEFAULT_PROJECTION_OFFSET_MINUTES),
        }
    }
}

impl EngineConfig {
    /// Set the risk-free rate.
    #[must_use]
    pub const fn with_risk_free_rate(mut self, rate: f64) -> Self {
        self.risk_free_rate = rate;
        self
    }

    /// Set the forward-projection offset.
    #[must_use]
    pub const fn with_projection_offset(mut self, offset: TimeDelta) -> Self {
        self.projection_offset = offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.risk_free_rate, 0.065);
        assert_eq!(config.projection_offset, TimeDelta::minutes(180));
    }

    #[test]
    fn config_builders() {
        let config = EngineConfig::default()
            .with_risk_free_rate(0.05)
            .with_projection_offset(TimeDelta::minutes(60));
        assert_eq!(config.risk_free_rate, 0.05);
        assert_eq!(config.projection_offset, TimeDelta::minutes(60));
    }
}
