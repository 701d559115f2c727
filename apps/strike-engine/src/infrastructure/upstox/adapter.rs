//! Upstox chain adapter implementing OptionChainPort.
//!
//! A single synchronous round trip per request, bounded by an explicit
//! timeout. Fetch failures are not retried; the whole analysis request fails
//! instead.

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{ChainFetchError, OptionChainPort};
use crate::domain::analysis::RawChainRecord;

use super::api_types::{OptionChainResponse, UpstoxErrorResponse};
use super::config::UpstoxConfig;
use super::error::UpstoxError;

/// Upstox market-data adapter.
///
/// Implements `OptionChainPort` for the Upstox option-chain endpoint.
#[derive(Debug, Clone)]
pub struct UpstoxChainAdapter {
    client: Client,
    base_url: String,
    access_token: String,
}

impl UpstoxChainAdapter {
    /// Create a new Upstox chain adapter.
    pub fn new(config: &UpstoxConfig) -> Result<Self, UpstoxError> {
        if config.access_token.is_empty() {
            return Err(UpstoxError::MissingCredentials);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| UpstoxError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            access_token: config.access_token.clone(),
        })
    }

    async fn get_chain(
        &self,
        instrument_key: &str,
        expiry_date: &str,
    ) -> Result<Vec<RawChainRecord>, UpstoxError> {
        let url = format!("{}/option-chain", self.base_url);

        tracing::debug!(instrument_key, expiry_date, "fetching option chain");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("instrument_key", instrument_key),
                ("expiry_date", expiry_date),
            ])
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| UpstoxError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<UpstoxErrorResponse>(&body)
                .ok()
                .and_then(|e| e.message)
                .unwrap_or(body);
            return Err(UpstoxError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: OptionChainResponse = response
            .json()
            .await
            .map_err(|e| UpstoxError::JsonParse(e.to_string()))?;

        if body.status.as_deref().is_some_and(|s| s != "success") {
            tracing::warn!(instrument_key, status = ?body.status, "chain response status not success");
        }

        tracing::debug!(
            instrument_key,
            strikes = body.data.len(),
            "option chain fetched"
        );

        Ok(body.data.into_iter().map(RawChainRecord::from).collect())
    }
}

#[async_trait]
impl OptionChainPort for UpstoxChainAdapter {
    async fn fetch_chain(
        &self,
        instrument_key: &str,
        expiry_date: &str,
    ) -> Result<Vec<RawChainRecord>, ChainFetchError> {
        self.get_chain(instrument_key, expiry_date)
            .await
            .map_err(ChainFetchError::from)
    }
}
