//! Application ports (outbound interfaces).

pub mod chain_port;

pub use chain_port::{ChainFetchError, OptionChainPort};
