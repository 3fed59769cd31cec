//! Adapters - implementations of the ports.

pub mod ai;
pub mod http;
pub mod rate_limiter;
pub mod store;

// Re-export common adapters for convenience
pub use ai::{ClipdropProvider, GeminiProvider, MockImageModel, MockTextModel};
pub use rate_limiter::InMemoryRateLimiter;
pub use store::{FirestoreVisualStore, InMemoryVisualStore};
