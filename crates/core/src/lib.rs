//! Tickerboard Core - the cached quote store.
//!
//! This crate owns the in-memory quote cache, its staleness policy, the
//! single in-flight refresh, and the strict/resilient refresh policies. It
//! talks to upstreams only through the `QuoteProvider` trait from the
//! `tickerboard-market-data` crate.

pub mod quotes;

pub use quotes::{QuoteStore, QuoteStoreError, RefreshMode, StoreOptions, CACHE_TTL};
