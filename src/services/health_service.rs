use tracing::debug;

use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a health payload summarising the registry contents.
pub fn health_status(state: &SharedState) -> HealthResponse {
    let registry = state.registry();
    let (teams, games) = (registry.team_count(), registry.game_count());
    debug!(teams, games, "health check");
    HealthResponse::ok(teams, games)
}
