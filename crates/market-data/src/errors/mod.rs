//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching a quote from a provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol was not found by the provider.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered but returned no quote for the symbol.
    #[error("No data for symbol: {symbol}")]
    NoData {
        /// The symbol that came back empty
        symbol: String,
    },

    /// The provider signalled that the request quota is exhausted.
    #[error("Rate limited: {provider} - {message}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
        /// The provider's rate limit message
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned a quote with missing or unparsable fields.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that returned the payload
        provider: String,
        /// What was wrong with it
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether this error means the provider's quota is used up.
    ///
    /// Callers stop issuing requests to the provider for the rest of the
    /// current refresh when this returns `true`.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limited_is_detected() {
        let error = MarketDataError::RateLimited {
            provider: "ALPHA_VANTAGE".to_string(),
            message: "Our standard API rate limit is 25 requests per day.".to_string(),
        };
        assert!(error.is_rate_limited());
    }

    #[test]
    fn test_other_errors_are_not_rate_limits() {
        let errors = [
            MarketDataError::SymbolNotFound("INVALID".to_string()),
            MarketDataError::NoData {
                symbol: "AAPL".to_string(),
            },
            MarketDataError::Timeout {
                provider: "ALPHA_VANTAGE".to_string(),
            },
            MarketDataError::ProviderError {
                provider: "ALPHA_VANTAGE".to_string(),
                message: "HTTP 500".to_string(),
            },
        ];
        for error in errors {
            assert!(!error.is_rate_limited(), "{error} flagged as rate limit");
        }
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::SymbolNotFound("INVALID".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: INVALID");

        let error = MarketDataError::Timeout {
            provider: "ALPHA_VANTAGE".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: ALPHA_VANTAGE");

        let error = MarketDataError::ProviderError {
            provider: "ALPHA_VANTAGE".to_string(),
            message: "API key invalid".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: ALPHA_VANTAGE - API key invalid"
        );
    }
}
