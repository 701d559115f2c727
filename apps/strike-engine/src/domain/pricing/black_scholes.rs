//! Closed-form European option pricing.
//!
//! Fair value plus the two sensitivities the strike analysis needs: delta
//! (price sensitivity to a unit move in the underlying) and gamma (sensitivity
//! of delta to a unit move in the underlying).
//!
//! With no remaining optionality (non-positive time-to-expiry or volatility)
//! the model collapses to intrinsic value with zero greeks, so the arithmetic
//! never divides by `sigma * sqrt(t)`.

// Black-Scholes uses standard mathematical notation (s, k, t, r, sigma)
#![allow(clippy::many_single_char_names)]
#![allow(clippy::suboptimal_flops)]

use serde::{Deserialize, Serialize};

use super::distribution::{norm_cdf, norm_pdf};

/// Option side (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionSide {
    /// Call option.
    Call,
    /// Put option.
    Put,
}

impl OptionSide {
    /// Intrinsic value of the side at the given underlying level.
    #[must_use]
    pub fn intrinsic(self, spot: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (spot - strike).max(0.0),
            Self::Put => (strike - spot).max(0.0),
        }
    }
}

impl std::fmt::Display for OptionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// Inputs to a single pricing evaluation.
///
/// Pure value type; recomputed per evaluation. Callers are responsible for
/// supplying positive `spot` and `strike`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingInput {
    /// Underlying price level.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Year-fraction time-to-expiry. May be zero or negative.
    pub time_to_expiry: f64,
    /// Annualized, continuously-compounded risk-free rate.
    pub rate: f64,
    /// Volatility.
    pub sigma: f64,
    /// Option side.
    pub side: OptionSide,
}

/// Fair value and sensitivities from one pricing evaluation.
///
/// Fair value is always non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingResult {
    /// Theoretical option price.
    pub fair_value: f64,
    /// Rate of change of fair value with respect to the underlying.
    pub delta: f64,
    /// Rate of change of delta with respect to the underlying.
    pub gamma: f64,
}

/// Price a European option and compute delta and gamma.
///
/// Degenerate case: when `time_to_expiry <= 0` or `sigma <= 0` the option has
/// no remaining optionality and the result is exactly the intrinsic value with
/// both sensitivities zero.
#[must_use]
pub fn price_and_greeks(input: PricingInput) -> PricingResult {
    let PricingInput {
        spot: s,
        strike: k,
        time_to_expiry: t,
        rate: r,
        sigma,
        side,
    } = input;

    if t <= 0.0 || sigma <= 0.0 {
        return PricingResult {
            fair_value: side.intrinsic(s, k),
            delta: 0.0,
            gamma: 0.0,
        };
    }

    let sqrt_t = t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * sqrt_t);
    let d2 = d1 - sigma * sqrt_t;
    let discount = (-r * t).exp();

    let (fair_value, delta) = match side {
        OptionSide::Call => (
            s * norm_cdf(d1) - k * discount * norm_cdf(d2),
            norm_cdf(d1),
        ),
        OptionSide::Put => (
            k * discount * norm_cdf(-d2) - s * norm_cdf(-d1),
            -norm_cdf(-d1),
        ),
    };

    let gamma = norm_pdf(d1) / (s * sigma * sqrt_t);

    PricingResult {
        fair_value,
        delta,
        gamma,
    }
}
