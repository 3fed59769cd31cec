//! Rate Limiter Adapters.
//!
//! A fixed-window in-memory limiter suits the gateway's single-process
//! deployment; the port keeps it swappable.

mod config;
mod in_memory;

pub use config::RateLimitConfig;
pub use in_memory::InMemoryRateLimiter;
