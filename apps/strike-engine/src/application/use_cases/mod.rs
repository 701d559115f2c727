//! Application use cases.

pub mod analyze_strikes;

pub use analyze_strikes::{AnalysisError, AnalyzeStrikesUseCase};
