//! Cached quote store with a single in-flight refresh.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use log::{debug, error, info, warn};
use tickerboard_market_data::{synthetic, QuoteProvider, QuoteSet, Ticker, TOP_TICKERS};
use tokio::time::Instant;

use super::constants::CACHE_TTL;
use super::errors::QuoteStoreError;
use super::mode::RefreshMode;
use super::refresh::{refresh_resilient, refresh_strict};

type RefreshResult = Result<QuoteSet, QuoteStoreError>;

/// Handle every caller of the in-flight refresh can await.
type PendingRefresh = Shared<BoxFuture<'static, RefreshResult>>;

#[derive(Clone, Debug)]
pub struct StoreOptions {
    pub mode: RefreshMode,
    pub tickers: &'static [Ticker],
    pub cache_ttl: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            mode: RefreshMode::default(),
            tickers: &TOP_TICKERS,
            cache_ttl: CACHE_TTL,
        }
    }
}

struct Snapshot {
    quotes: QuoteSet,
    fetched_at: Instant,
}

#[derive(Default)]
struct CacheState {
    snapshot: Option<Snapshot>,
    pending: Option<PendingRefresh>,
}

impl CacheState {
    fn fresh(&self, ttl: Duration) -> Option<QuoteSet> {
        self.snapshot
            .as_ref()
            .filter(|s| s.fetched_at.elapsed() <= ttl)
            .map(|s| s.quotes.clone())
    }

    fn cached(&self) -> Option<QuoteSet> {
        self.snapshot.as_ref().map(|s| s.quotes.clone())
    }
}

struct StoreInner {
    provider: Option<Arc<dyn QuoteProvider>>,
    options: StoreOptions,
    state: Mutex<CacheState>,
}

impl StoreInner {
    /// A panicking refresh must not wedge the store, so poisoning is ignored.
    fn lock_state(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn run_refresh(&self) -> RefreshResult {
        let provider = self.provider.as_deref();
        let tickers = self.options.tickers;
        match self.options.mode {
            RefreshMode::Strict => refresh_strict(provider, tickers).await,
            RefreshMode::Resilient => Ok(refresh_resilient(provider, tickers).await),
        }
    }

    fn store_snapshot(&self, quotes: QuoteSet) {
        if !quotes.is_aligned_with(self.options.tickers) {
            error!("Refusing to cache a quote set that does not match the ticker list");
            return;
        }
        self.lock_state().snapshot = Some(Snapshot {
            quotes,
            fetched_at: Instant::now(),
        });
    }

    fn cached_or_synthetic(&self) -> QuoteSet {
        let cached = self.lock_state().cached();
        cached.unwrap_or_else(|| synthetic::quote_set(self.options.tickers))
    }
}

/// Clears the in-flight marker when the refresh task ends, including when it
/// panics or is cancelled.
struct InFlightGuard(Arc<StoreInner>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.lock_state().pending = None;
    }
}

/// Serves the ticker board from a time-bounded cache.
///
/// At most one refresh runs at a time per store. The refresh itself runs on
/// its own task, so a caller that goes away mid-refresh does not cancel it
/// for everybody else.
#[derive(Clone)]
pub struct QuoteStore {
    inner: Arc<StoreInner>,
}

impl QuoteStore {
    pub fn new(provider: Option<Arc<dyn QuoteProvider>>, options: StoreOptions) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                provider,
                options,
                state: Mutex::new(CacheState::default()),
            }),
        }
    }

    pub fn mode(&self) -> RefreshMode {
        self.inner.options.mode
    }

    pub fn tickers(&self) -> &'static [Ticker] {
        self.inner.options.tickers
    }

    pub fn is_refreshing(&self) -> bool {
        self.inner.lock_state().pending.is_some()
    }

    pub fn has_snapshot(&self) -> bool {
        self.inner.lock_state().snapshot.is_some()
    }

    /// Returns the ticker board, refreshing it when the cache is empty, stale,
    /// or `force` is set.
    ///
    /// Only strict mode returns errors. In resilient mode a caller that finds
    /// a refresh already running, or that triggers the very first one, is
    /// answered immediately with the cached or synthetic set.
    pub async fn get_quotes(&self, force: bool) -> RefreshResult {
        match self.inner.options.mode {
            RefreshMode::Strict => self.get_strict(force).await,
            RefreshMode::Resilient => Ok(self.get_resilient(force).await),
        }
    }

    async fn get_strict(&self, force: bool) -> RefreshResult {
        let pending = {
            let mut state = self.inner.lock_state();
            if !force {
                if let Some(quotes) = state.fresh(self.inner.options.cache_ttl) {
                    debug!("Serving cached quotes");
                    return Ok(quotes);
                }
            }
            match &state.pending {
                Some(pending) => {
                    debug!("Joining in-flight refresh");
                    pending.clone()
                }
                None => self.start_refresh(&mut state),
            }
        };

        pending.await
    }

    async fn get_resilient(&self, force: bool) -> QuoteSet {
        let pending = {
            let mut state = self.inner.lock_state();
            if !force {
                if let Some(quotes) = state.fresh(self.inner.options.cache_ttl) {
                    debug!("Serving cached quotes");
                    return quotes;
                }
            }
            if state.pending.is_some() {
                debug!("Refresh already running, serving current quotes");
                return state
                    .cached()
                    .unwrap_or_else(|| synthetic::quote_set(self.inner.options.tickers));
            }

            let pending = self.start_refresh(&mut state);
            if state.snapshot.is_none() {
                info!("No cached quotes yet, serving synthetic quotes while refreshing");
                return synthetic::quote_set(self.inner.options.tickers);
            }
            pending
        };

        match pending.await {
            Ok(quotes) => quotes,
            Err(e) => {
                warn!("Refresh did not complete, serving current quotes: {}", e);
                self.inner.cached_or_synthetic()
            }
        }
    }

    /// Spawns the refresh task and records it as in flight. Must be called
    /// with the state lock held and no refresh pending.
    fn start_refresh(&self, state: &mut CacheState) -> PendingRefresh {
        info!(
            "Starting {} refresh of {} tickers",
            self.inner.options.mode,
            self.inner.options.tickers.len()
        );

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let _guard = InFlightGuard(Arc::clone(&inner));
            let result = inner.run_refresh().await;
            match &result {
                Ok(quotes) => inner.store_snapshot(quotes.clone()),
                Err(e) => warn!("Refresh failed, keeping previous cache: {}", e),
            }
            result
        });

        let pending = async move {
            match handle.await {
                Ok(result) => result,
                Err(e) => Err(QuoteStoreError::RefreshAborted(e.to_string())),
            }
        }
        .boxed()
        .shared();

        state.pending = Some(pending.clone());
        pending
    }
}
