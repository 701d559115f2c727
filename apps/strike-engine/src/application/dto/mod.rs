//! Data transfer objects for the application boundary.

pub mod analyze_dto;

pub use analyze_dto::{AnalyzeRequestDto, AnalyzeResponseDto, StrikeMetricsDto};
