//! HTTP response bodies.

use serde::{Deserialize, Serialize};

use crate::application::dto::{AnalyzeResponseDto, StrikeMetricsDto};

/// Body of a successful `POST /api/v1/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// Metrics for every tradable strike in the chain.
    pub computed: Vec<StrikeMetricsDto>,
    /// Ranked shortlist, at most 5 entries.
    pub selected: Vec<StrikeMetricsDto>,
}

impl From<AnalyzeResponseDto> for AnalyzeResponse {
    fn from(dto: AnalyzeResponseDto) -> Self {
        Self {
            computed: dto.computed,
            selected: dto.selected,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code string.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}
