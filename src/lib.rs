//! VisualForge - Prompt-to-Visual Gateway
//!
//! This crate turns a free-text prompt into an enhanced prompt, a generated
//! image and a Mermaid diagram by orchestrating two hosted AI providers
//! behind a small HTTP gateway.

pub mod adapters;
pub mod application;
pub mod client;
pub mod config;
pub mod domain;
pub mod ports;
