//! HTTP adapters - REST API implementations.

pub mod generate;
pub mod middleware;

// Re-export key types for convenience
pub use generate::{routes, GatewayAppState};
pub use middleware::{rate_limit_middleware, RateLimiterState};
