//! In-memory rate limiter.
//!
//! Fixed-window counter over an in-memory HashMap. Suitable for
//! single-process deployments; the window resets when it expires.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::RwLock;

use crate::ports::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitStatus, RateLimiter,
};

use super::RateLimitConfig;

/// In-memory fixed-window rate limiter.
#[derive(Debug)]
pub struct InMemoryRateLimiter {
    config: RateLimitConfig,
    windows: Arc<RwLock<HashMap<String, WindowState>>>,
}

/// State for a single rate limit window.
#[derive(Debug, Clone)]
struct WindowState {
    /// Requests counted in the current window.
    count: u32,
    /// Unix second the current window started.
    window_start: u64,
}

impl InMemoryRateLimiter {
    /// Creates a new limiter with the given configuration.
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            config,
            windows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a limiter with the default configuration (100 per 15 min).
    pub fn with_defaults() -> Self {
        Self::new(RateLimitConfig::default())
    }

    fn now_secs() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

#[async_trait]
impl RateLimiter for InMemoryRateLimiter {
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError> {
        let bucket = key.bucket_key();
        let limit = self.config.max_requests;
        let window_secs = self.config.window_secs;
        let now = Self::now_secs();

        let mut windows = self.windows.write().await;

        let state = windows.entry(bucket).or_insert_with(|| WindowState {
            count: 0,
            window_start: now,
        });

        let window_end = state.window_start + window_secs as u64;
        if now >= window_end {
            state.count = 0;
            state.window_start = now;
        }

        if state.count >= limit {
            let retry_after = (state.window_start + window_secs as u64).saturating_sub(now) as u32;

            return Ok(RateLimitResult::Denied(RateLimitDenied {
                limit,
                retry_after_secs: retry_after.max(1),
                scope: key.scope,
                message: format!(
                    "Rate limit exceeded for {}. Retry after {} seconds.",
                    key.scope, retry_after
                ),
            }));
        }

        state.count += 1;
        Ok(RateLimitResult::Allowed(RateLimitStatus {
            limit,
            remaining: limit.saturating_sub(state.count),
            reset_at: state.window_start + window_secs as u64,
            window_secs,
        }))
    }

    async fn status(&self, key: RateLimitKey) -> Result<RateLimitStatus, RateLimitError> {
        let bucket = key.bucket_key();
        let limit = self.config.max_requests;
        let window_secs = self.config.window_secs;
        let now = Self::now_secs();

        let windows = self.windows.read().await;

        let (count, window_start) = windows
            .get(&bucket)
            .map(|state| {
                let window_end = state.window_start + window_secs as u64;
                if now >= window_end {
                    (0, now)
                } else {
                    (state.count, state.window_start)
                }
            })
            .unwrap_or((0, now));

        Ok(RateLimitStatus {
            limit,
            remaining: limit.saturating_sub(count),
            reset_at: window_start + window_secs as u64,
            window_secs,
        })
    }

    async fn reset(&self, key: RateLimitKey) -> Result<(), RateLimitError> {
        let mut windows = self.windows.write().await;
        windows.remove(&key.bucket_key());
        Ok(())
    }
}
