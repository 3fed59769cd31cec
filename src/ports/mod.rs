//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application core and the outside world. Adapters implement them.
//!
//! - `TextModel` - hosted text-generation provider (enhancement, diagrams)
//! - `ImageModel` - hosted image-generation provider (binary payloads)
//! - `VisualStore` - remote document store for archived visuals
//! - `RateLimiter` - injected request rate limiting

mod image_model;
mod rate_limiter;
mod text_model;
mod visual_store;

pub use image_model::{GeneratedImage, ImageModel};
pub use rate_limiter::{
    RateLimitDenied, RateLimitError, RateLimitKey, RateLimitResult, RateLimitScope,
    RateLimitStatus, RateLimiter,
};
pub use text_model::{ModelError, TextModel};
pub use visual_store::{NewVisual, StoreError, VisualStore};
