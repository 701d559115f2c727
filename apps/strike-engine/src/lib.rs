// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Strike Engine - Rust Core Library
//!
//! Pricing-and-ranking engine for the StrikeWise option selection tools.
//!
//! Given a trader's view (projected target level, projected stop-loss level,
//! capital, lot size, expiry), the engine prices every strike in the option
//! chain at both levels with a closed-form Black-Scholes model and returns a
//! bounded shortlist of the most capital-efficient contracts.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure pricing and analysis logic, no I/O
//!   - `pricing`: normal distribution, Black-Scholes fair value and greeks,
//!     time-horizon resolution
//!   - `analysis`: chain normalization, per-strike metrics, shortlist selection
//!
//! - **Application**: Use cases and port definitions
//!   - `ports`: `OptionChainPort` for the external chain lookup
//!   - `use_cases`: `AnalyzeStrikesUseCase` (the per-request pipeline)
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `upstox`: Upstox market-data adapter (outbound)
//!   - `http`: REST API controller (inbound)
//!
//! The whole pipeline is request-scoped and stateless: nothing is shared
//! between requests and no durable state is written.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Pricing and analysis logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Engine configuration (risk-free rate, projection offset).
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::analysis::{ChainRow, RawChainRecord, StrikeMetrics, select_shortlist};
pub use domain::pricing::{OptionSide, PricingInput, PricingResult, price_and_greeks};

// Application re-exports
pub use application::dto::{AnalyzeRequestDto, AnalyzeResponseDto, StrikeMetricsDto};
pub use application::ports::{ChainFetchError, OptionChainPort};
pub use application::use_cases::{AnalysisError, AnalyzeStrikesUseCase};

// Infrastructure re-exports
pub use config::EngineConfig;
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::upstox::{UpstoxChainAdapter, UpstoxConfig, UpstoxError};
