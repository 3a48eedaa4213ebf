//! Alpha Vantage market data provider implementation.
//!
//! Latest quotes come from the `GLOBAL_QUOTE` endpoint, one symbol per call.
//!
//! Note: Alpha Vantage free tier is limited to a handful of calls per minute
//! and per day. When the quota is used up the API still answers HTTP 200, with
//! an `Information` (or `Note`) message instead of a quote.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{Quote, QuoteSource, Ticker};
use crate::provider::{QuoteProvider, RateLimit};

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";

/// Per-request timeout for upstream calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Pause between consecutive calls within one refresh.
const MIN_DELAY: Duration = Duration::from_secs(15);

/// Alpha Vantage market data provider.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

// ============================================================================
// Response structures for Alpha Vantage API
// ============================================================================

/// GLOBAL_QUOTE response
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

/// Quote body. Alpha Vantage answers `{}` for symbols it does not know, so
/// every field is optional.
#[derive(Debug, Default, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
    #[serde(rename = "06. volume")]
    volume: Option<String>,
    #[serde(rename = "09. change")]
    change: Option<String>,
    #[serde(rename = "10. change percent")]
    change_percent: Option<String>,
}

impl GlobalQuote {
    fn is_empty(&self) -> bool {
        self.symbol.is_none()
            && self.price.is_none()
            && self.volume.is_none()
            && self.change.is_none()
            && self.change_percent.is_none()
    }

    /// Convert to a Quote for `ticker`.
    fn to_quote(&self, ticker: &Ticker) -> Result<Quote, MarketDataError> {
        Ok(Quote {
            symbol: ticker.symbol.to_string(),
            name: ticker.name.to_string(),
            price: required_decimal("05. price", self.price.as_deref())?,
            change: required_decimal("09. change", self.change.as_deref())?,
            percent_change: required_decimal(
                "10. change percent",
                self.change_percent.as_deref().map(strip_percent),
            )?,
            volume: self
                .volume
                .as_deref()
                .and_then(parse_volume)
                .ok_or_else(|| invalid_field("06. volume", self.volume.as_deref()))?,
            source: QuoteSource::Upstream,
        })
    }
}

fn invalid_field(field: &str, value: Option<&str>) -> MarketDataError {
    MarketDataError::InvalidResponse {
        provider: PROVIDER_ID.to_string(),
        message: match value {
            Some(v) => format!("unparsable '{}': {:?}", field, v),
            None => format!("missing '{}'", field),
        },
    }
}

fn required_decimal(field: &str, value: Option<&str>) -> Result<Decimal, MarketDataError> {
    value
        .and_then(parse_decimal)
        .ok_or_else(|| invalid_field(field, value))
}

/// Parse a decimal value from a string.
fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s.trim()).ok()
}

/// "0.5123%" -> "0.5123"
fn strip_percent(s: &str) -> &str {
    s.trim().trim_end_matches('%')
}

fn parse_volume(s: &str) -> Option<u64> {
    s.trim().parse::<u64>().ok()
}

fn transport_error(e: reqwest::Error) -> MarketDataError {
    if e.is_timeout() {
        MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        }
    } else {
        MarketDataError::Network(e)
    }
}

/// Alpha Vantage's quota messages have used both phrasings over time.
fn is_rate_limit_message(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("rate limit") || msg.contains("api call frequency")
}

// ============================================================================
// AlphaVantageProvider implementation
// ============================================================================

impl AlphaVantageProvider {
    /// Create a new Alpha Vantage provider with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    /// Create a provider that talks to a different endpoint (proxies, tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key,
            base_url,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout (10 s by default).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Alpha Vantage expects class shares with a dash ("BRK.B" -> "BRK-B").
    fn format_symbol(symbol: &str) -> String {
        symbol.replace('.', "-")
    }

    /// Make a request to the Alpha Vantage API.
    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(&self.base_url, &all_params).map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response.text().await.map_err(transport_error)
    }

    /// Check for API-level errors in the response.
    fn check_api_error(response: &GlobalQuoteResponse) -> Result<(), MarketDataError> {
        if let Some(ref msg) = response.error_message {
            if msg.contains("Invalid API call") || msg.contains("not found") {
                return Err(MarketDataError::SymbolNotFound(msg.clone()));
            }
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: msg.clone(),
            });
        }

        for msg in [&response.note, &response.information].into_iter().flatten() {
            if is_rate_limit_message(msg) {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                    message: msg.clone(),
                });
            }
            warn!("Alpha Vantage info: {}", msg);
        }

        Ok(())
    }

    /// Turn a raw GLOBAL_QUOTE body into a Quote for `ticker`.
    fn parse_global_quote(text: &str, ticker: &Ticker) -> Result<Quote, MarketDataError> {
        let response: GlobalQuoteResponse =
            serde_json::from_str(text).map_err(|e| MarketDataError::InvalidResponse {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        Self::check_api_error(&response)?;

        match response.global_quote {
            Some(ref quote) if !quote.is_empty() => quote.to_quote(ticker),
            _ => Err(MarketDataError::NoData {
                symbol: ticker.symbol.to_string(),
            }),
        }
    }
}

// ============================================================================
// QuoteProvider trait implementation
// ============================================================================

#[async_trait]
impl QuoteProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn rate_limit(&self) -> RateLimit {
        RateLimit::sequential(MIN_DELAY)
    }

    async fn get_latest_quote(&self, ticker: &Ticker) -> Result<Quote, MarketDataError> {
        let symbol = Self::format_symbol(ticker.symbol);
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", symbol.as_str())];

        let text = self.fetch(&params).await?;
        debug!(
            "Alpha Vantage response for {}: {}",
            ticker.symbol,
            text.chars().take(200).collect::<String>()
        );

        Self::parse_global_quote(&text, ticker)
    }
}
