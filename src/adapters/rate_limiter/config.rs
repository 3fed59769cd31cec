//! Rate limit configuration.

use serde::{Deserialize, Serialize};

/// Fixed-window rate limit configuration.
///
/// One window applies to every caller bucket, independent of endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Window duration in seconds.
    #[serde(default = "default_window_secs")]
    pub window_secs: u32,
    /// Maximum requests per caller per window.
    #[serde(default = "default_max_requests")]
    pub max_requests: u32,
}

fn default_window_secs() -> u32 {
    900
}

fn default_max_requests() -> u32 {
    100
}

impl Default for RateLimitConfig {
    /// 100 requests per caller per 15 minutes.
    fn default() -> Self {
        Self {
            window_secs: default_window_secs(),
            max_requests: default_max_requests(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_100_per_15_minutes() {
        let config = RateLimitConfig::default();
        assert_eq!(config.window_secs, 900);
        assert_eq!(config.max_requests, 100);
    }
}
