//! Infrastructure Layer
//!
//! Adapters for the ports defined in the application layer:
//!
//! - **Driven Adapters (Outbound)**:
//!   - `upstox`: Upstox market-data API adapter for the chain lookup
//!
//! - **Driver Adapters (Inbound)**:
//!   - `http`: REST API controller

pub mod http;
pub mod upstox;
