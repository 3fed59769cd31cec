//! HTTP adapter for the generation endpoints.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::GatewayAppState;
pub use routes::routes;
