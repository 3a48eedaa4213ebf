//! Quote provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Quote, Ticker};

use super::rate_limit::RateLimit;

/// Trait for upstream quote providers.
///
/// Implement this trait to add support for a new quote source.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use async_trait::async_trait;
/// use tickerboard_market_data::{Quote, QuoteProvider, RateLimit, Ticker};
/// use tickerboard_market_data::errors::MarketDataError;
///
/// struct MyProvider {
///     api_key: String,
/// }
///
/// #[async_trait]
/// impl QuoteProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     fn rate_limit(&self) -> RateLimit {
///         RateLimit::sequential(Duration::from_secs(1))
///     }
///
///     async fn get_latest_quote(&self, ticker: &Ticker) -> Result<Quote, MarketDataError> {
///         // ...
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "ALPHA_VANTAGE".
    fn id(&self) -> &'static str;

    /// Rate limiting configuration.
    ///
    /// Callers insert `RateLimit::spacing()` between two consecutive
    /// requests to this provider.
    fn rate_limit(&self) -> RateLimit;

    /// Fetch the latest quote for a ticker.
    ///
    /// Returns `MarketDataError::RateLimited` when the provider reports that
    /// its quota is exhausted, so callers can stop issuing requests.
    async fn get_latest_quote(&self, ticker: &Ticker) -> Result<Quote, MarketDataError>;
}
