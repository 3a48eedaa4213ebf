use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tickerboard_market_data::QuoteSet;

use crate::error::{ApiError, ApiResult};
use crate::main_lib::{initialize_quotes, AppState};

/// Current ticker board, from cache when fresh.
async fn get_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<QuoteSet>> {
    let result = if state.is_ready() {
        state.quote_store.get_quotes(false).await
    } else {
        initialize_quotes(&state).await
    };
    result.map(Json).map_err(ApiError::Fetch)
}

/// Ticker board after a forced refresh.
async fn refresh_stocks(State(state): State<Arc<AppState>>) -> ApiResult<Json<QuoteSet>> {
    let quotes = state
        .quote_store
        .get_quotes(true)
        .await
        .map_err(ApiError::Refresh)?;
    Ok(Json(quotes))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stocks", get(get_stocks))
        .route("/api/stocks/refresh", get(refresh_stocks))
}
