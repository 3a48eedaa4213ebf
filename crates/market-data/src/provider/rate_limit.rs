//! Rate limiting configuration for providers.

use std::time::Duration;

/// How callers should pace requests to a provider.
///
/// Providers are always called one request at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimit {
    /// Maximum requests allowed per minute.
    pub requests_per_minute: u32,

    /// Minimum pause between two consecutive requests.
    pub min_delay: Duration,
}

impl RateLimit {
    /// Requests spaced `min_delay` apart.
    pub fn sequential(min_delay: Duration) -> Self {
        let per_minute = match min_delay.as_millis() {
            0 => u32::MAX,
            ms => (60_000 / ms).clamp(1, u32::MAX as u128) as u32,
        };
        Self {
            requests_per_minute: per_minute,
            min_delay,
        }
    }

    /// Pause to keep between two consecutive requests: `min_delay`, stretched
    /// when the per-minute budget demands more room.
    pub fn spacing(&self) -> Duration {
        let per_request = match self.requests_per_minute {
            0 => Duration::from_secs(60),
            u32::MAX => Duration::ZERO,
            n => Duration::from_secs(60) / n,
        };
        self.min_delay.max(per_request)
    }
}
