use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{anyhow, Context};
use tickerboard_core::RefreshMode;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "public";
/// Longer than a full ten-ticker refresh (9 x 15 s between calls).
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 300_000;

#[derive(Clone, Debug)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub api_key: Option<String>,
    pub refresh_mode: RefreshMode,
    pub static_dir: String,
    pub cors_allow_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            api_key: None,
            refresh_mode: RefreshMode::default(),
            static_dir: DEFAULT_STATIC_DIR.to_string(),
            cors_allow_origins: vec!["*".to_string()],
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT '{}'", port))?,
            None => DEFAULT_PORT,
        };

        let refresh_mode = match var("QUOTE_REFRESH_MODE") {
            Some(mode) => mode.parse::<RefreshMode>().map_err(|e| anyhow!(e))?,
            None => defaults.refresh_mode,
        };

        let request_timeout = match var("REQUEST_TIMEOUT_MS") {
            Some(ms) => Duration::from_millis(
                ms.parse::<u64>()
                    .with_context(|| format!("Invalid REQUEST_TIMEOUT_MS '{}'", ms))?,
            ),
            None => defaults.request_timeout,
        };

        let cors_allow_origins = var("CORS_ALLOW_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_allow_origins);

        Ok(Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            api_key: var("ALPHA_VANTAGE_API_KEY"),
            refresh_mode,
            static_dir: var("STATIC_DIR").unwrap_or(defaults.static_dir),
            cors_allow_origins,
            request_timeout,
        })
    }
}
