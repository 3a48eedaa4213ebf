//! Quote cache module.
//!
//! - [`store`] - The cached store and its single in-flight refresh
//! - [`mode`] - Strict and resilient refresh modes
//! - [`errors`] - Errors returned by strict refreshes
//! - [`constants`] - Cache lifetime
//!
//! ```text
//! QuoteStore ──(one refresh at a time)──> refresh policy ──> QuoteProvider
//!     │                                          │
//!     └── Snapshot (quotes + fetched_at)         └── synthetic fallback
//! ```

pub mod constants;
pub mod errors;
pub mod mode;
mod refresh;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

pub use constants::CACHE_TTL;
pub use errors::QuoteStoreError;
pub use mode::RefreshMode;
pub use store::{QuoteStore, StoreOptions};
