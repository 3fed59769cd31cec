//! AI Provider Adapters.
//!
//! Implementations of the TextModel and ImageModel ports.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Generative Language API (text)
//! - `ClipdropProvider` - Clipdrop text-to-image API (binary payloads)
//! - `MockTextModel` / `MockImageModel` - configurable mocks for testing

mod clipdrop_provider;
mod gemini_provider;
mod mock;

pub use clipdrop_provider::{ClipdropConfig, ClipdropProvider};
pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock::{MockImageModel, MockTextModel};
