//! Strike analysis.
//!
//! Turns a raw option chain into ranked, capital-efficiency-ordered strike
//! recommendations:
//!
//! - [`chain`]: normalizes raw chain records to one row per strike
//! - [`metrics`]: prices each strike at the target and stop-loss levels
//! - [`selector`]: filters, ranks, and truncates to the shortlist

pub mod chain;
pub mod metrics;
pub mod selector;

pub use chain::{ChainRow, RawChainRecord, normalize_chain};
pub use metrics::{ProjectionParams, StrikeMetrics, compute_metrics};
pub use selector::{SHORTLIST_CAP, select_shortlist};
