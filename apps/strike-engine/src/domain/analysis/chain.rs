//! Option chain normalization.
//!
//! Maps raw per-strike chain records into a uniform row for the requested
//! side, deriving a volatility figure for the pricing model along the way.
//!
//! The volatility proxy is *not* a calibrated implied volatility: the chain
//! payload exposes a per-side vega, and the proxy is that vega scaled down by
//! 100, with a constant fallback when the field is missing or non-positive.
//! Calibrating a real implied vol from the traded price would need the live
//! underlying level, which this pipeline never sees.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::OptionSide;

/// Fallback volatility when the chain exposes no usable vega.
pub const FALLBACK_VOLATILITY: f64 = 0.15;

/// Divisor applied to the raw vega field to obtain the volatility proxy.
const VEGA_SCALE: f64 = 100.0;

/// One raw record from the external chain lookup.
///
/// Per-side fields may be absent in the upstream payload.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawChainRecord {
    /// Strike price.
    pub strike_price: f64,
    /// Last traded price of the call side.
    pub call_ltp: Option<f64>,
    /// Last traded price of the put side.
    pub put_ltp: Option<f64>,
    /// Call-side vega.
    pub call_vega: Option<f64>,
    /// Put-side vega.
    pub put_vega: Option<f64>,
}

/// One strike's market snapshot for the requested side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainRow {
    /// Strike price.
    pub strike: f64,
    /// Last traded price of the chosen side.
    pub last_price: f64,
    /// Volatility proxy fed to the pricing model.
    pub volatility_proxy: f64,
}

/// Normalize raw chain records to one row per strike for the given side.
#[must_use]
pub fn normalize_chain(records: &[RawChainRecord], side: OptionSide) -> Vec<ChainRow> {
    records
        .iter()
        .map(|record| {
            let (ltp, vega) = match side {
                OptionSide::Call => (record.call_ltp, record.call_vega),
                OptionSide::Put => (record.put_ltp, record.put_vega),
            };
            ChainRow {
                strike: record.strike_price,
                last_price: ltp.unwrap_or(0.0),
                volatility_proxy: volatility_proxy(vega),
            }
        })
        .collect()
}

/// Scale the raw vega into a pseudo-volatility, falling back to
/// [`FALLBACK_VOLATILITY`] when the field is missing or not strictly positive.
fn volatility_proxy(vega: Option<f64>) -> f64 {
    match vega {
        Some(v) if v / VEGA_SCALE > 0.0 => v / VEGA_SCALE,
        _ => FALLBACK_VOLATILITY,
    }
}
