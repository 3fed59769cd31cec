//! Rate limiting port.
//!
//! The gateway applies one fixed-window limit keyed by caller address. The
//! limiter is an injected component rather than a process-wide singleton, so
//! handlers and middleware can be tested against an isolated instance.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Port for rate limiting operations.
///
/// Implementations must be safe for concurrent access; the gateway calls
/// `check` from every request.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Check if a request is allowed, consuming a slot if so.
    async fn check(&self, key: RateLimitKey) -> Result<RateLimitResult, RateLimitError>;

    /// Get current status for a key without consuming a slot.
    async fn status(&self, key: RateLimitKey) -> Result<RateLimitStatus, RateLimitError>;

    /// Reset the window for a key, restoring full quota.
    async fn reset(&self, key: RateLimitKey) -> Result<(), RateLimitError>;
}

/// Key identifying what to rate limit.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct RateLimitKey {
    /// The scope of this rate limit.
    pub scope: RateLimitScope,
    /// Identifier within the scope (caller IP, or "global").
    pub identifier: String,
}

/// The scope at which rate limiting is applied.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLimitScope {
    /// Shared bucket for requests with no resolvable caller address.
    Global,
    /// Per-caller-address bucket.
    Ip,
}

impl RateLimitKey {
    /// Creates the shared global key.
    pub fn global() -> Self {
        Self {
            scope: RateLimitScope::Global,
            identifier: "global".to_string(),
        }
    }

    /// Creates a caller-address key.
    pub fn ip(ip: &str) -> Self {
        Self {
            scope: RateLimitScope::Ip,
            identifier: ip.to_string(),
        }
    }

    /// Returns the bucket key string for this rate limit key.
    pub fn bucket_key(&self) -> String {
        format!("ratelimit:{}:{}", self.scope, self.identifier)
    }
}

impl RateLimitScope {
    /// Returns the string representation of the scope.
    pub fn as_str(&self) -> &'static str {
        match self {
            RateLimitScope::Global => "global",
            RateLimitScope::Ip => "ip",
        }
    }
}

impl fmt::Display for RateLimitScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a rate limit check.
#[derive(Debug, Clone)]
pub enum RateLimitResult {
    /// Request is allowed; includes current status.
    Allowed(RateLimitStatus),
    /// Request is denied; includes denial details.
    Denied(RateLimitDenied),
}

impl RateLimitResult {
    /// Returns true if the request was allowed.
    pub fn is_allowed(&self) -> bool {
        matches!(self, RateLimitResult::Allowed(_))
    }

    /// Returns true if the request was denied.
    pub fn is_denied(&self) -> bool {
        matches!(self, RateLimitResult::Denied(_))
    }
}

/// Current rate limit status.
#[derive(Debug, Clone)]
pub struct RateLimitStatus {
    /// Maximum requests allowed in the window.
    pub limit: u32,
    /// Remaining requests in the current window.
    pub remaining: u32,
    /// Unix timestamp when the current window resets.
    pub reset_at: u64,
    /// Window duration in seconds.
    pub window_secs: u32,
}

/// Details of a rate limit denial.
#[derive(Debug, Clone)]
pub struct RateLimitDenied {
    /// Maximum requests allowed in the window.
    pub limit: u32,
    /// Seconds until the client should retry.
    pub retry_after_secs: u32,
    /// The scope that triggered the denial.
    pub scope: RateLimitScope,
    /// Human-readable message explaining the denial.
    pub message: String,
}

/// Errors that can occur during rate limiting operations.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    /// Rate limiter backend is unavailable.
    #[error("rate limiter unavailable: {0}")]
    Unavailable(String),
}
