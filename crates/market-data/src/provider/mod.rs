//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider` trait that all upstream providers implement
//! - Rate limiting configuration
//! - The Alpha Vantage provider
//! - The synthetic quote generator used when no upstream data is available

mod rate_limit;
mod traits;

pub mod alpha_vantage;
pub mod synthetic;

// Re-exports
pub use rate_limit::RateLimit;
pub use traits::QuoteProvider;
