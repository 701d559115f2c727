//! Upstox market-data adapter.
//!
//! Outbound adapter implementing [`crate::application::ports::OptionChainPort`]
//! against the Upstox option-chain endpoint.

mod adapter;
mod api_types;
mod config;
mod error;

pub use adapter::UpstoxChainAdapter;
pub use config::UpstoxConfig;
pub use error::UpstoxError;
