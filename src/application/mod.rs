//! Application layer - one handler per gateway operation.
//!
//! Handlers own the fallback policy: text-model failures are substituted
//! with documented fallback values here, never inside the adapters.

mod diagram;
mod enhance;
mod generate;

pub use diagram::GenerateDiagramHandler;
pub use enhance::EnhancePromptHandler;
pub use generate::GenerateVisualHandler;
