//! Domain Layer
//!
//! The innermost layer containing the quantitative logic with zero
//! infrastructure dependencies:
//!
//! - [`pricing`]: closed-form option pricing and its supporting math
//! - [`analysis`]: per-strike metric computation and shortlist selection

pub mod analysis;
pub mod pricing;
