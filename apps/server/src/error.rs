use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tickerboard_core::QuoteStoreError;

/// Failures surfaced to HTTP clients. Both map to 503 with the store error as
/// the `message`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Unable to fetch stock data from Alpha Vantage")]
    Fetch(#[source] QuoteStoreError),
    #[error("Unable to refresh stock data from Alpha Vantage")]
    Refresh(#[source] QuoteStoreError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    fn source_error(&self) -> &QuoteStoreError {
        match self {
            ApiError::Fetch(e) | ApiError::Refresh(e) => e,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.source_error().to_string();
        tracing::error!("{}: {}", self, message);
        let body = Json(json!({
            "error": self.to_string(),
            "message": message,
        }));
        (StatusCode::SERVICE_UNAVAILABLE, body).into_response()
    }
}
