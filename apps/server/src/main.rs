use std::path::PathBuf;

use tickerboard_server::api::app_router;
use tickerboard_server::config::Config;
use tickerboard_server::main_lib::{build_state, init_tracing, initialize_quotes};
use tower_http::services::{ServeDir, ServeFile};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config)?;

    // Warm the cache in the background; /ready reports when it is done
    let init_state = state.clone();
    tokio::spawn(async move {
        // Failures are logged inside; /api/stocks retries until one succeeds
        if initialize_quotes(&init_state).await.is_err() {
            tracing::info!("Initial quote load deferred to the first /api/stocks request");
        }
    });

    let static_dir = PathBuf::from(&config.static_dir);
    let index_file = static_dir.join("index.html");
    let static_service = ServeDir::new(static_dir).fallback(ServeFile::new(index_file));
    let router = app_router(state, &config).fallback_service(static_service);
    tracing::info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
