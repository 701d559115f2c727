//! Option pricing.
//!
//! Closed-form European option pricing (fair value, delta, gamma) plus the
//! standard-normal distribution helpers and the calendar-to-year-fraction
//! horizon resolution it depends on.

pub mod black_scholes;
pub mod distribution;
pub mod horizon;

pub use black_scholes::{OptionSide, PricingInput, PricingResult, price_and_greeks};
pub use distribution::{norm_cdf, norm_pdf};
pub use horizon::year_fraction_to_expiry;
