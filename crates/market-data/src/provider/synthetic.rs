//! Synthetic quotes for when the upstream provider cannot be used.
//!
//! Prices are drawn around each ticker's reference price:
//! - price: reference price ±2%
//! - change: ±1.5% of the drawn price
//! - percent change: derived from change and price
//! - volume: uniform in [5,000,000, 15,000,000)
//!
//! Price, change and percent change are rounded to 2 decimal places.

use log::debug;
use rand::Rng;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::models::{base_price, company_name, Quote, QuoteSet, QuoteSource, Ticker};

const PRICE_JITTER: f64 = 0.02;
const CHANGE_JITTER: f64 = 0.015;
const MIN_VOLUME: u64 = 5_000_000;
const MAX_VOLUME: u64 = 15_000_000;

fn to_cents(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default().round_dp(2)
}

fn build<R: Rng + ?Sized>(symbol: &str, name: &str, base: f64, rng: &mut R) -> Quote {
    let price = base + base * rng.gen_range(-PRICE_JITTER..PRICE_JITTER);
    let change = price * rng.gen_range(-CHANGE_JITTER..CHANGE_JITTER);
    let percent_change = change / price * 100.0;

    Quote {
        symbol: symbol.to_string(),
        name: name.to_string(),
        price: to_cents(price),
        change: to_cents(change),
        percent_change: to_cents(percent_change),
        volume: rng.gen_range(MIN_VOLUME..MAX_VOLUME),
        source: QuoteSource::Synthetic,
    }
}

/// Build a synthetic quote for `symbol` using the given random source.
///
/// Unknown symbols use a reference price of 100 and their own symbol as name.
pub fn quote_with_rng<R: Rng + ?Sized>(symbol: &str, rng: &mut R) -> Quote {
    build(symbol, company_name(symbol), base_price(symbol), rng)
}

/// Build a synthetic quote set for `tickers` using the given random source.
pub fn quote_set_with_rng<R: Rng + ?Sized>(tickers: &[Ticker], rng: &mut R) -> QuoteSet {
    QuoteSet::new(
        tickers
            .iter()
            .map(|ticker| build(ticker.symbol, ticker.name, ticker.base_price, &mut *rng))
            .collect(),
    )
}

/// Build a synthetic quote set with one entry per ticker, in ticker order.
pub fn quote_set(tickers: &[Ticker]) -> QuoteSet {
    debug!("Generating synthetic quotes for {} symbols", tickers.len());
    quote_set_with_rng(tickers, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TOP_TICKERS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rust_decimal_macros::dec;

    #[test]
    fn test_aapl_price_within_two_percent() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let q = quote_with_rng("AAPL", &mut rng);
            // 2% band around 237.30, widened by half a cent for rounding
            assert!(q.price >= dec!(232.549) && q.price <= dec!(242.051), "{}", q.price);
        }
    }

    #[test]
    fn test_volume_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let q = quote_with_rng("MSFT", &mut rng);
            assert!((5_000_000..15_000_000).contains(&q.volume), "{}", q.volume);
        }
    }

    #[test]
    fn test_change_within_band_and_rounded() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let q = quote_with_rng("NVDA", &mut rng);
            assert!(q.price.scale() <= 2);
            assert!(q.change.scale() <= 2);
            assert!(q.percent_change.scale() <= 2);
            assert!(q.change.abs() <= q.price * dec!(0.015) + dec!(0.01));
            assert!(q.percent_change.abs() <= dec!(1.51));
        }
    }

    #[test]
    fn test_unknown_symbol_uses_default_base_price() {
        let mut rng = StdRng::seed_from_u64(5);
        let q = quote_with_rng("ZZZZ", &mut rng);
        assert_eq!(q.name, "ZZZZ");
        assert!(q.price >= dec!(97.99) && q.price <= dec!(102.01));
        assert!(q.is_synthetic());
    }

    #[test]
    fn test_quote_set_follows_ticker_order() {
        let set = quote_set(&TOP_TICKERS);
        assert!(set.is_aligned_with(&TOP_TICKERS));
        assert_eq!(set.upstream_count(), 0);
        assert_eq!(set.get("JPM").map(|q| q.name.as_str()), Some("JPMorgan Chase & Co."));
    }

    #[test]
    fn test_same_seed_same_quotes() {
        let a = quote_set_with_rng(&TOP_TICKERS, &mut StdRng::seed_from_u64(42));
        let b = quote_set_with_rng(&TOP_TICKERS, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
