//! Option Chain Port (Driven Port)
//!
//! Interface for fetching option-chain data from an external market-data
//! provider. This is a secondary/outbound port used by the analysis use case.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::analysis::RawChainRecord;

/// Errors from a chain lookup.
///
/// Every variant terminates the request: the pipeline never produces partial
/// results from a failed fetch.
#[derive(Debug, Error, Clone)]
pub enum ChainFetchError {
    /// The provider returned a non-success status.
    #[error("chain provider returned status {status}: {message}")]
    Upstream {
        /// HTTP status code from the provider.
        status: u16,
        /// Error body or reason from the provider.
        message: String,
    },

    /// The request never completed (connect failure, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The provider responded with a body we could not decode.
    #[error("malformed chain payload: {0}")]
    Malformed(String),
}

/// Port for the external option-chain lookup.
#[async_trait]
pub trait OptionChainPort: Send + Sync {
    /// Fetch the per-strike chain records for an instrument and expiry date.
    async fn fetch_chain(
        &self,
        instrument_key: &str,
        expiry_date: &str,
    ) -> Result<Vec<RawChainRecord>, ChainFetchError>;
}
