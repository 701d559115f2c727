//! HTTP request bodies.

use serde::Deserialize;

use crate::application::dto::AnalyzeRequestDto;
use crate::domain::pricing::OptionSide;

/// Body of `POST /api/v1/analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    /// Available capital.
    pub capital: f64,
    /// Contracts per lot.
    pub lot_size: f64,
    /// Option side to analyze.
    pub option_type: OptionSide,
    /// Contract expiry (RFC 3339 or `YYYY-MM-DD`).
    pub expiry: String,
    /// Decision timestamp (RFC 3339).
    pub decision_time: String,
    /// Projected favorable underlying level.
    pub spot_target: f64,
    /// Projected adverse (stop-loss) underlying level.
    pub spot_sl: f64,
    /// Instrument identifier understood by the chain provider.
    pub instrument_key: String,
}

impl From<AnalyzeRequest> for AnalyzeRequestDto {
    fn from(request: AnalyzeRequest) -> Self {
        Self {
            capital: request.capital,
            lot_size: request.lot_size,
            option_type: request.option_type,
            expiry: request.expiry,
            decision_time: request.decision_time,
            spot_target: request.spot_target,
            spot_sl: request.spot_sl,
            instrument_key: request.instrument_key,
        }
    }
}
