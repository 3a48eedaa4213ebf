//! Quote store error types.

use thiserror::Error;

/// Errors surfaced by a quote refresh.
///
/// Only strict refreshes return these to callers. Resilient refreshes log
/// them and fall back to synthetic quotes instead.
///
/// The type is `Clone` because a single refresh outcome is handed to every
/// caller waiting on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuoteStoreError {
    /// No upstream credential is configured.
    #[error("Alpha Vantage API key is not configured")]
    MissingCredential,

    /// One symbol could not be fetched (network error, timeout, empty or
    /// malformed payload).
    #[error("Failed to fetch {symbol}: {message}")]
    SymbolFetch { symbol: String, message: String },

    /// The upstream quota ran out during the refresh.
    #[error("API rate limit reached while fetching {symbol}")]
    RateLimitExhausted { symbol: String },

    /// The refresh finished without a single upstream quote.
    #[error("No stock data could be retrieved")]
    NoDataRetrieved,

    /// The refresh task stopped before producing an outcome.
    #[error("Quote refresh aborted: {0}")]
    RefreshAborted(String),
}
