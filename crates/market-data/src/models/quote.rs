use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ticker::Ticker;

/// Where a quote's numbers came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuoteSource {
    /// Returned by the upstream provider
    Upstream,
    /// Generated locally from the reference price table
    #[default]
    Synthetic,
}

/// Latest quote for one symbol
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Ticker symbol
    pub symbol: String,

    /// Company display name
    pub name: String,

    /// Last traded price
    pub price: Decimal,

    /// Absolute change since the previous close
    pub change: Decimal,

    /// Change since the previous close, in percent
    pub percent_change: Decimal,

    /// Traded volume
    pub volume: u64,

    /// Origin of the quote (not part of the wire format)
    #[serde(skip)]
    pub source: QuoteSource,
}

impl Quote {
    pub fn is_synthetic(&self) -> bool {
        self.source == QuoteSource::Synthetic
    }
}

/// One quote per tracked ticker, positionally aligned with the ticker list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteSet(Vec<Quote>);

impl QuoteSet {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self(quotes)
    }

    /// True when there is exactly one quote per ticker, in ticker order.
    pub fn is_aligned_with(&self, tickers: &[Ticker]) -> bool {
        self.0.len() == tickers.len()
            && self
                .0
                .iter()
                .zip(tickers)
                .all(|(quote, ticker)| quote.symbol == ticker.symbol)
    }

    /// Number of quotes that came from the upstream provider.
    pub fn upstream_count(&self) -> usize {
        self.0.iter().filter(|q| !q.is_synthetic()).count()
    }

    pub fn get(&self, symbol: &str) -> Option<&Quote> {
        self.0.iter().find(|q| q.symbol == symbol)
    }

    pub fn replace(&mut self, index: usize, quote: Quote) {
        if let Some(slot) = self.0.get_mut(index) {
            *slot = quote;
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quote> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Quote> {
        self.0
    }
}

impl<'a> IntoIterator for &'a QuoteSet {
    type Item = &'a Quote;
    type IntoIter = std::slice::Iter<'a, Quote>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
