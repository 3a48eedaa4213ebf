//! Tickerboard Market Data Crate
//!
//! This crate provides the quote model and the upstream quote providers
//! used by the Tickerboard quote store.
//!
//! # Overview
//!
//! The market data crate supports:
//! - A fixed table of tracked tickers with display names and reference prices
//! - Latest-quote fetching from Alpha Vantage (`GLOBAL_QUOTE`)
//! - Synthetic quote generation for when the upstream is unavailable
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +-------------------+
//! |   Quote Store    | --> |  QuoteProvider    |  (one upstream call per ticker)
//! +------------------+     +-------------------+
//!          |                         |
//!          v                         v
//! +------------------+     +-------------------+
//! |    synthetic     |     | AlphaVantage      |
//! +------------------+     +-------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Ticker`] - Row of the fixed symbol table
//! - [`Quote`] - Latest price, change and volume for one symbol
//! - [`QuoteSet`] - One quote per ticker, in ticker order
//! - [`QuoteProvider`] - Upstream source of latest quotes
//! - [`RateLimit`] - Pacing a provider expects from its callers

pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{base_price, company_name, Quote, QuoteSet, QuoteSource, Ticker, TOP_TICKERS};

// Re-export provider types
pub use provider::alpha_vantage::AlphaVantageProvider;
pub use provider::synthetic;
pub use provider::{QuoteProvider, RateLimit};
