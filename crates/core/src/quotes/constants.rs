//! Quote cache constants.

use std::time::Duration;

/// How long a successfully refreshed snapshot is served without new I/O.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);
