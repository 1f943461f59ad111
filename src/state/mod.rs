/// Games, their phases and team size bounds.
pub mod game;
/// Concurrent owner of every team and game.
pub mod registry;
/// Player counters and achievements.
pub mod stats;
/// Players and team rosters.
pub mod team;

use std::sync::Arc;

use crate::config::AppConfig;

pub use self::registry::Registry;

/// Handle to the application state passed to axum handlers.
pub type SharedState = Arc<AppState>;

/// Central application state shared by every request handler.
pub struct AppState {
    registry: Registry,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        Arc::new(Self {
            registry: Registry::new(config.team_sizes()),
        })
    }

    /// Owner of the team and game collections.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
