use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tickerboard_core::{QuoteStore, QuoteStoreError, StoreOptions};
use tickerboard_market_data::{AlphaVantageProvider, QuoteProvider, QuoteSet};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub quote_store: QuoteStore,
    /// Opens once the first `get_quotes` call has produced data.
    ready: AtomicBool,
}

impl AppState {
    pub fn new(quote_store: QuoteStore) -> Self {
        Self {
            quote_store,
            ready: AtomicBool::new(false),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("text") {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let provider = match &config.api_key {
        Some(key) => {
            let provider: Arc<dyn QuoteProvider> = Arc::new(AlphaVantageProvider::new(key.clone()));
            Some(provider)
        }
        None => {
            tracing::warn!("ALPHA_VANTAGE_API_KEY is not set, no upstream quotes will be fetched");
            None
        }
    };
    Ok(build_state_with_provider(config, provider))
}

/// Same as [`build_state`] with an explicit provider in place of the one
/// derived from the API key.
pub fn build_state_with_provider(
    config: &Config,
    provider: Option<Arc<dyn QuoteProvider>>,
) -> Arc<AppState> {
    tracing::info!("Quote refresh mode: {}", config.refresh_mode);
    let options = StoreOptions {
        mode: config.refresh_mode,
        ..StoreOptions::default()
    };
    Arc::new(AppState::new(QuoteStore::new(provider, options)))
}

/// Loads the first ticker board and opens the readiness gate on success.
/// Runs once at startup and again from `/api/stocks` until it succeeds.
pub async fn initialize_quotes(state: &AppState) -> Result<QuoteSet, QuoteStoreError> {
    match state.quote_store.get_quotes(false).await {
        Ok(quotes) => {
            if !state.ready.swap(true, Ordering::AcqRel) {
                tracing::info!("Initial stock data loaded ({} quotes)", quotes.len());
            }
            Ok(quotes)
        }
        Err(e) => {
            tracing::error!("Failed to initialize stock data: {}", e);
            Err(e)
        }
    }
}
