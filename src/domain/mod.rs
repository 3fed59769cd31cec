//! Domain types and prompt shaping.

pub mod prompt;
mod visual;

pub use visual::{GeneratedVisual, StyleTag, VisualId, VisualRecord};
