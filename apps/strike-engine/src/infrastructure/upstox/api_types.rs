//! Wire types for the Upstox option-chain endpoint.

use serde::Deserialize;

use crate::domain::analysis::RawChainRecord;

/// Top-level option-chain response.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainResponse {
    /// API status string (e.g. "success").
    #[serde(default)]
    pub status: Option<String>,
    /// Per-strike records.
    #[serde(default)]
    pub data: Vec<OptionChainEntry>,
}

/// One per-strike entry as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionChainEntry {
    /// Strike price.
    pub strike_price: f64,
    /// Last traded price of the call side.
    #[serde(default)]
    pub call_ltp: Option<f64>,
    /// Last traded price of the put side.
    #[serde(default)]
    pub put_ltp: Option<f64>,
    /// Call-side vega.
    #[serde(default)]
    pub call_vega: Option<f64>,
    /// Put-side vega.
    #[serde(default)]
    pub put_vega: Option<f64>,
}

impl From<OptionChainEntry> for RawChainRecord {
    fn from(entry: OptionChainEntry) -> Self {
        Self {
            strike_price: entry.strike_price,
            call_ltp: entry.call_ltp,
            put_ltp: entry.put_ltp,
            call_vega: entry.call_vega,
            put_vega: entry.put_vega,
        }
    }
}

/// Error body returned by the API on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstoxErrorResponse {
    /// Error detail, when present.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chain_payload() {
        let json = r#"{
            "status": "success",
            "data": [
                {"strike_price": 22500.0, "call_ltp": 182.4, "put_ltp": 95.1,
                 "call_vega": 14.2, "put_vega": 14.9},
                {"strike_price": 22550.0, "call_ltp": 155.0, "put_ltp": 118.0}
            ]
        }"#;
        let response: OptionChainResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.status.as_deref(), Some("success"));
        assert_eq!(response.data.len(), 2);
        assert_eq!(response.data[0].call_vega, Some(14.2));
        assert_eq!(response.data[1].call_vega, None);
    }

    #[test]
    fn entry_converts_to_raw_record() {
        let entry = OptionChainEntry {
            strike_price: 22_500.0,
            call_ltp: Some(182.4),
            put_ltp: None,
            call_vega: Some(14.2),
            put_vega: None,
        };
        let record = RawChainRecord::from(entry);
        assert_eq!(record.strike_price, 22_500.0);
        assert_eq!(record.put_ltp, None);
    }

    #[test]
    fn missing_data_defaults_to_empty() {
        let response: OptionChainResponse = serde_json::from_str(r#"{"status": "error"}"#).unwrap();
        assert!(response.data.is_empty());
    }
}
