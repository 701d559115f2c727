//! Analyze Strikes Use Case
//!
//! The per-request pipeline: validate the request, resolve the pricing
//! horizon, fetch the chain, normalize it, compute per-strike metrics, and
//! select the shortlist. Stateless; a pure function from request to result
//! apart from the single outbound chain fetch.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

use crate::application::dto::{AnalyzeRequestDto, AnalyzeResponseDto, StrikeMetricsDto};
use crate::application::ports::{ChainFetchError, OptionChainPort};
use crate::config::EngineConfig;
use crate::domain::analysis::{ProjectionParams, compute_metrics, normalize_chain, select_shortlist};
use crate::domain::pricing::year_fraction_to_expiry;

/// Errors from the analysis pipeline.
///
/// An empty shortlist is *not* an error: when no strike passes the
/// profitability filter the response simply carries an empty `selected` list.
#[derive(Debug, Error, Clone)]
pub enum AnalysisError {
    /// The request failed validation before any pricing ran.
    #[error("invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request.
        message: String,
    },

    /// The chain lookup failed; the whole request fails with no partial result.
    #[error("option chain unavailable: {message}")]
    UpstreamUnavailable {
        /// Underlying fetch failure.
        message: String,
    },
}

impl AnalysisError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}

impl From<ChainFetchError> for AnalysisError {
    fn from(err: ChainFetchError) -> Self {
        Self::UpstreamUnavailable {
            message: err.to_string(),
        }
    }
}

/// Use case for analyzing an option chain against a trader's view.
pub struct AnalyzeStrikesUseCase<C>
where
    C: OptionChainPort,
{
    chain: Arc<C>,
    config: EngineConfig,
}

impl<C> AnalyzeStrikesUseCase<C>
where
    C: OptionChainPort,
{
    /// Create a new AnalyzeStrikesUseCase.
    pub const fn new(chain: Arc<C>, config: EngineConfig) -> Self {
        Self { chain, config }
    }

    /// Execute the use case.
    pub async fn execute(
        &self,
        request: AnalyzeRequestDto,
    ) -> Result<AnalyzeResponseDto, AnalysisError> {
        // 1. Reject malformed requests before any pricing computation.
        let (decision_time, expiry) = validate(&request)?;

        // 2. Resolve the year-fraction horizon as of the projected hit time.
        let time_to_expiry =
            year_fraction_to_expiry(decision_time, expiry, self.config.projection_offset);

        // 3. Fetch the raw chain; any failure terminates the request.
        let records = self
            .chain
            .fetch_chain(&request.instrument_key, &request.expiry)
            .await
            .map_err(|e| {
                tracing::warn!(
                    instrument_key = %request.instrument_key,
                    error = %e,
                    "chain fetch failed"
                );
                AnalysisError::from(e)
            })?;

        // 4-6. Normalize, compute metrics, select.
        let rows = normalize_chain(&records, request.option_type);
        let metrics = compute_metrics(
            &rows,
            ProjectionParams {
                target: request.spot_target,
                stop_loss: request.spot_sl,
                time_to_expiry,
                rate: self.config.risk_free_rate,
                lot_size: request.lot_size,
                side: request.option_type,
            },
        );
        let shortlist = select_shortlist(&metrics);

        tracing::info!(
            instrument_key = %request.instrument_key,
            side = %request.option_type,
            time_to_expiry,
            strikes = rows.len(),
            computed = metrics.len(),
            selected = shortlist.len(),
            "strike analysis complete"
        );

        Ok(AnalyzeResponseDto {
            computed: metrics.iter().map(StrikeMetricsDto::from).collect(),
            selected: shortlist.iter().map(StrikeMetricsDto::from).collect(),
        })
    }
}

/// Validate the request and parse its timestamps.
fn validate(request: &AnalyzeRequestDto) -> Result<(DateTime<Utc>, DateTime<Utc>), AnalysisError> {
    if !(request.capital > 0.0 && request.capital.is_finite()) {
        return Err(AnalysisError::invalid(format!(
            "capital must be positive, got {}",
            request.capital
        )));
    }
    if !(request.lot_size > 0.0 && request.lot_size.is_finite()) {
        return Err(AnalysisError::invalid(format!(
            "lot size must be positive, got {}",
            request.lot_size
        )));
    }
    if !(request.spot_target > 0.0 && request.spot_target.is_finite()) {
        return Err(AnalysisError::invalid(
            "target level must be a positive price",
        ));
    }
    if !(request.spot_sl > 0.0 && request.spot_sl.is_finite()) {
        return Err(AnalysisError::invalid(
            "stop-loss level must be a positive price",
        ));
    }
    if request.instrument_key.is_empty() {
        return Err(AnalysisError::invalid("instrument key must not be empty"));
    }

    let decision_time = DateTime::parse_from_rfc3339(&request.decision_time)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            AnalysisError::invalid(format!(
                "decision time '{}' is not a valid RFC 3339 timestamp: {e}",
                request.decision_time
            ))
        })?;
    let expiry = parse_expiry(&request.expiry)?;

    Ok((decision_time, expiry))
}

/// Parse the expiry as RFC 3339, or as a bare date at UTC midnight (the
/// chain provider keys expiries by date).
fn parse_expiry(value: &str) -> Result<DateTime<Utc>, AnalysisError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
        .map_err(|e| {
            AnalysisError::invalid(format!("expiry '{value}' is not a valid timestamp: {e}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{RawChainRecord, SHORTLIST_CAP};
    use async_trait::async_trait;

    struct MockChain {
        records: Result<Vec<RawChainRecord>, ChainFetchError>,
    }

    #[async_trait]
    impl OptionChainPort for MockChain {
        async fn fetch_chain(
            &self,
            _instrument_key: &str,
            _expiry_date: &str,
        ) -> Result<Vec<RawChainRecord>, ChainFetchError> {
            self.records.clone()
        }
    }

    fn record(strike: f64, call_ltp: f64) -> RawChainRecord {
        RawChainRecord {
            strike_price: strike,
            call_ltp: Some(call_ltp),
            put_ltp: Some(call_ltp * 0.8),
            call_vega: Some(15.0),
            put_vega: Some(15.0),
        }
    }

    fn request() -> AnalyzeRequestDto {
        AnalyzeRequestDto {
            capital: 100_000.0,
            lot_size: 75.0,
            option_type: crate::domain::pricing::OptionSide::Call,
            expiry: "2024-06-27".to_string(),
            decision_time: "2024-06-03T09:30:00Z".to_string(),
            spot_target: 22_600.0,
            spot_sl: 22_400.0,
            instrument_key: "NSE_INDEX|Nifty 50".to_string(),
        }
    }

    fn use_case(
        records: Result<Vec<RawChainRecord>, ChainFetchError>,
    ) -> AnalyzeStrikesUseCase<MockChain> {
        AnalyzeStrikesUseCase::new(Arc::new(MockChain { records }), EngineConfig::default())
    }

    #[tokio::test]
    async fn happy_path_returns_metrics_and_shortlist() {
        let records: Vec<RawChainRecord> = (0..10)
            .map(|i| record(22_300.0 + f64::from(i) * 50.0, 250.0 - f64::from(i) * 20.0))
            .collect();
        let response = use_case(Ok(records)).execute(request()).await.unwrap();

        assert_eq!(response.computed.len(), 10);
        assert!(response.selected.len() <= SHORTLIST_CAP);
        for m in &response.selected {
            assert!(m.profit_percent > 0.0);
            assert!(m.loss_percent > 0.0);
        }
        for pair in response.selected.windows(2) {
            assert!(pair[0].efficiency >= pair[1].efficiency);
        }
    }

    #[tokio::test]
    async fn zero_premium_strike_is_excluded() {
        let records = vec![record(22_500.0, 0.0), record(22_550.0, 120.0)];
        let response = use_case(Ok(records)).execute(request()).await.unwrap();
        assert_eq!(response.computed.len(), 1);
        assert_eq!(response.computed[0].strike, 22_550.0);
    }

    #[tokio::test]
    async fn upstream_failure_terminates_request() {
        let err = ChainFetchError::Upstream {
            status: 503,
            message: "down".to_string(),
        };
        let result = use_case(Err(err)).execute(request()).await;
        assert!(matches!(
            result,
            Err(AnalysisError::UpstreamUnavailable { .. })
        ));
    }

    #[tokio::test]
    async fn non_positive_capital_is_rejected() {
        let mut req = request();
        req.capital = 0.0;
        let result = use_case(Ok(vec![])).execute(req).await;
        assert!(matches!(result, Err(AnalysisError::InvalidRequest { .. })));
    }

    #[tokio::test]
    async fn non_positive_lot_size_is_rejected() {
        let mut req = request();
        req.lot_size = -1.0;
        let result = use_case(Ok(vec![])).execute(req).await;
        assert!(matches!(result, Err(AnalysisError::InvalidRequest { .. })));
    }

    #[tokio::test]
    async fn malformed_decision_time_is_rejected() {
        let mut req = request();
        req.decision_time = "yesterday".to_string();
        let result = use_case(Ok(vec![])).execute(req).await;
        assert!(matches!(result, Err(AnalysisError::InvalidRequest { .. })));
    }

    #[tokio::test]
    async fn malformed_expiry_is_rejected() {
        let mut req = request();
        req.expiry = "27-06-2024".to_string();
        let result = use_case(Ok(vec![])).execute(req).await;
        assert!(matches!(result, Err(AnalysisError::InvalidRequest { .. })));
    }

    #[tokio::test]
    async fn expired_horizon_prices_every_strike_at_intrinsic() {
        // Decision time + 180min offset lands past the expiry.
        let mut req = request();
        req.decision_time = "2024-06-27T10:00:00Z".to_string();
        req.expiry = "2024-06-27T11:00:00Z".to_string();

        let records = vec![record(22_500.0, 180.0), record(22_700.0, 60.0)];
        let response = use_case(Ok(records)).execute(req).await.unwrap();

        // 22500 call intrinsic at target 22600 is 100; 22700 is worthless.
        assert_eq!(response.computed[0].target_value, 100.0);
        assert_eq!(response.computed[0].delta, 0.0);
        assert_eq!(response.computed[0].gamma, 0.0);
        assert_eq!(response.computed[1].target_value, 0.0);
    }

    #[tokio::test]
    async fn empty_chain_yields_empty_success() {
        let response = use_case(Ok(vec![])).execute(request()).await.unwrap();
        assert!(response.computed.is_empty());
        assert!(response.selected.is_empty());
    }

    #[test]
    fn expiry_accepts_both_formats() {
        assert!(parse_expiry("2024-06-27").is_ok());
        assert!(parse_expiry("2024-06-27T15:30:00+05:30").is_ok());
        assert!(parse_expiry("June 27").is_err());
    }
}
