//! Refresh policies.
//!
//! Both policies call the provider once per ticker, strictly in ticker order,
//! pausing for the provider's `RateLimit::spacing` between two consecutive calls.

use log::{info, warn};
use tickerboard_market_data::{synthetic, Quote, QuoteProvider, QuoteSet, Ticker};

use super::errors::QuoteStoreError;

/// Pin the provider's quote to the ticker it was requested for, so the set
/// stays positionally aligned with the ticker list.
fn aligned(quote: Quote, ticker: &Ticker) -> Quote {
    Quote {
        symbol: ticker.symbol.to_string(),
        name: ticker.name.to_string(),
        ..quote
    }
}

/// All-or-nothing refresh.
///
/// Returns the first failure; a rate limit stops the refresh immediately.
pub(crate) async fn refresh_strict(
    provider: Option<&dyn QuoteProvider>,
    tickers: &[Ticker],
) -> Result<QuoteSet, QuoteStoreError> {
    let provider = provider.ok_or(QuoteStoreError::MissingCredential)?;
    if tickers.is_empty() {
        return Err(QuoteStoreError::NoDataRetrieved);
    }

    let delay = provider.rate_limit().spacing();
    let mut quotes = Vec::with_capacity(tickers.len());

    for (i, ticker) in tickers.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(delay).await;
        }

        info!(
            "Fetching {} ({}/{}) from {}",
            ticker.symbol,
            i + 1,
            tickers.len(),
            provider.id()
        );

        match provider.get_latest_quote(ticker).await {
            Ok(quote) => quotes.push(aligned(quote, ticker)),
            Err(e) if e.is_rate_limited() => {
                warn!("API limit reached: {}", e);
                return Err(QuoteStoreError::RateLimitExhausted {
                    symbol: ticker.symbol.to_string(),
                });
            }
            Err(e) => {
                return Err(QuoteStoreError::SymbolFetch {
                    symbol: ticker.symbol.to_string(),
                    message: e.to_string(),
                });
            }
        }
    }

    info!("Fetched {} quotes from {}", quotes.len(), provider.id());
    Ok(QuoteSet::new(quotes))
}

/// Best-effort refresh that never fails.
///
/// Starts from synthetic quotes and overwrites each one the provider
/// returns. A rate limit ends the upstream calls for this refresh; any other
/// per-symbol failure keeps that symbol's synthetic quote.
pub(crate) async fn refresh_resilient(
    provider: Option<&dyn QuoteProvider>,
    tickers: &[Ticker],
) -> QuoteSet {
    let mut quotes = synthetic::quote_set(tickers);

    let Some(provider) = provider else {
        warn!("No quote provider configured. Using synthetic quotes.");
        return quotes;
    };

    let delay = provider.rate_limit().spacing();

    for (i, ticker) in tickers.iter().enumerate() {
        if i > 0 {
            tokio::time::sleep(delay).await;
        }

        info!(
            "Fetching {} ({}/{}) from {}",
            ticker.symbol,
            i + 1,
            tickers.len(),
            provider.id()
        );

        match provider.get_latest_quote(ticker).await {
            Ok(quote) => quotes.replace(i, aligned(quote, ticker)),
            Err(e) if e.is_rate_limited() => {
                warn!("API limit reached at {}, keeping synthetic quotes: {}", ticker.symbol, e);
                break;
            }
            Err(e) => {
                warn!("Error fetching {}, keeping synthetic quote: {}", ticker.symbol, e);
            }
        }
    }

    let real = quotes.upstream_count();
    if real == 0 {
        warn!("{}, serving synthetic quotes", QuoteStoreError::NoDataRetrieved);
    }
    info!(
        "Completed refresh with {} real and {} synthetic entries",
        real,
        quotes.len() - real
    );

    quotes
}
