//! Scripted quote provider shared by the store and refresh tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tickerboard_market_data::errors::MarketDataError;
use tickerboard_market_data::{Quote, QuoteProvider, QuoteSource, RateLimit, Ticker};
use tokio::time::Instant;

pub static TICKERS: [Ticker; 4] = [
    Ticker {
        symbol: "AAPL",
        name: "Apple Inc.",
        base_price: 237.30,
    },
    Ticker {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        base_price: 392.53,
    },
    Ticker {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        base_price: 168.50,
    },
    Ticker {
        symbol: "AMZN",
        name: "Amazon.com Inc.",
        base_price: 208.74,
    },
];

pub const DELAY: Duration = Duration::from_secs(15);

/// What the mock answers for one symbol.
#[derive(Clone, Copy, Debug)]
pub enum Script {
    Price(Decimal),
    RateLimited,
    Fail,
    WrongSymbol,
    Panic,
}

#[derive(Default)]
pub struct MockProvider {
    scripts: Mutex<HashMap<&'static str, Script>>,
    calls: Mutex<Vec<(&'static str, Instant)>>,
}

impl MockProvider {
    /// Every symbol answers a price of 100 unless scripted otherwise.
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn as_dyn(&self) -> &dyn QuoteProvider {
        self
    }

    pub fn script(&self, symbol: &'static str, script: Script) {
        self.scripts.lock().unwrap().insert(symbol, script);
    }

    pub fn script_all(&self, script: Script) {
        let mut scripts = self.scripts.lock().unwrap();
        for ticker in TICKERS.iter() {
            scripts.insert(ticker.symbol, script);
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn called_symbols(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|(s, _)| *s).collect()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.calls.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }
}

fn upstream_quote(symbol: &str, name: &str, price: Decimal) -> Quote {
    Quote {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price,
        change: dec!(1.25),
        percent_change: dec!(0.5),
        volume: 1_000,
        source: QuoteSource::Upstream,
    }
}

#[async_trait]
impl QuoteProvider for MockProvider {
    fn id(&self) -> &'static str {
        "MOCK"
    }

    fn rate_limit(&self) -> RateLimit {
        RateLimit::sequential(DELAY)
    }

    async fn get_latest_quote(&self, ticker: &Ticker) -> Result<Quote, MarketDataError> {
        self.calls
            .lock()
            .unwrap()
            .push((ticker.symbol, Instant::now()));

        let script = self
            .scripts
            .lock()
            .unwrap()
            .get(ticker.symbol)
            .copied()
            .unwrap_or(Script::Price(dec!(100)));

        match script {
            Script::Price(price) => Ok(upstream_quote(ticker.symbol, ticker.name, price)),
            Script::RateLimited => Err(MarketDataError::RateLimited {
                provider: "MOCK".to_string(),
                message: "Our standard API rate limit is 25 requests per day.".to_string(),
            }),
            Script::Fail => Err(MarketDataError::Timeout {
                provider: "MOCK".to_string(),
            }),
            Script::WrongSymbol => Ok(upstream_quote("XXX", "Wrong", dec!(1))),
            Script::Panic => panic!("mock provider exploded on {}", ticker.symbol),
        }
    }
}
