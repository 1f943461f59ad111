//! DTO definitions for games.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{format_system_time, team::TeamSummary, validation::validate_not_blank},
    state::game::{Game, GamePhase},
};

/// Payload used to start a game between two registered teams.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateGameRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    pub team1_id: Uuid,
    pub team2_id: Uuid,
}

/// Payload naming the side that won a stopped game.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct MarkWinnerRequest {
    pub team_id: Uuid,
}

/// Lifecycle status exposed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Open,
    Stopped,
}

/// Public projection of a game and its team snapshots.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameSummary {
    pub id: Uuid,
    pub name: String,
    pub team1: TeamSummary,
    pub team2: TeamSummary,
    /// RFC 3339 timestamp.
    pub start_time: String,
    /// RFC 3339 timestamp, `null` while the game is open.
    pub stop_time: Option<String>,
    pub status: GameStatus,
    /// Whole seconds played, once stopped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Uuid>,
}

impl From<GamePhase> for GameStatus {
    fn from(phase: GamePhase) -> Self {
        match phase {
            GamePhase::Open => GameStatus::Open,
            GamePhase::Stopped => GameStatus::Stopped,
        }
    }
}

impl From<Game> for GameSummary {
    fn from(game: Game) -> Self {
        let status = game.phase().into();
        let duration_seconds = game.duration();

        Self {
            id: game.id,
            name: game.name,
            team1: game.team1.into(),
            team2: game.team2.into(),
            start_time: format_system_time(game.start_time),
            stop_time: game.stop_time.map(format_system_time),
            status,
            duration_seconds,
            winner: game.winner,
        }
    }
}
