//! Application Layer
//!
//! Orchestrates the domain pipeline through use cases. It defines:
//!
//! - **Ports**: Interfaces for external systems (the option-chain lookup)
//! - **Use Cases**: The per-request analysis pipeline
//! - **DTOs**: Data transfer objects for API boundaries

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::*;
