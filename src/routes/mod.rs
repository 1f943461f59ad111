use axum::Router;

use crate::state::SharedState;

/// Swagger UI and OpenAPI document.
pub mod docs;
pub mod extract;
/// Game endpoints.
pub mod games;
/// Health check endpoint.
pub mod health;
/// Team endpoints.
pub mod teams;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(teams::router())
        .merge(games::router());

    api_router.merge(docs::router()).with_state(state)
}
