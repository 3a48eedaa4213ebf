//! Market data models
//!
//! - `ticker` - The fixed table of tracked symbols (Ticker, TOP_TICKERS)
//! - `quote` - Quote data structures (Quote, QuoteSet, QuoteSource)

mod quote;
mod ticker;

pub use quote::{Quote, QuoteSet, QuoteSource};
pub use ticker::{base_price, company_name, Ticker, TOP_TICKERS};
