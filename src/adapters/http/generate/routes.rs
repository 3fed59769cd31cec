//! Route definitions for the generation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{generate_diagram, generate_visual, liveness, GatewayAppState};

/// Create the gateway router with all endpoints.
///
/// # Endpoints
///
/// - `POST /generate` - Enhance a prompt and generate an image
/// - `POST /generate-diagram` - Generate a Mermaid diagram
/// - `GET /` - Liveness probe
pub fn routes() -> Router<GatewayAppState> {
    Router::new()
        .route("/", get(liveness))
        .route("/generate", post(generate_visual))
        .route("/generate-diagram", post(generate_diagram))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_creates_valid_router() {
        // Ensures the route configuration compiles and creates a valid router
        let _routes = routes();
    }
}
