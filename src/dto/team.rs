//! DTO definitions for teams and their rosters.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::{
        stats::{AchievementsSummary, StatsSummary},
        validation::validate_not_blank,
    },
    state::team::{Player, Team},
};

/// Payload used to register a new team.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTeamRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
}

/// Payload used to add a player to a team roster.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddPlayerRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub pseudo: String,
}

/// Public projection of a player.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlayerSummary {
    pub id: Uuid,
    pub pseudo: String,
    pub stats: StatsSummary,
    pub achievements: AchievementsSummary,
}

/// Public projection of a team with its roster in insertion order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamSummary {
    pub id: Uuid,
    pub name: String,
    pub players: Vec<PlayerSummary>,
}

impl From<Player> for PlayerSummary {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            pseudo: player.pseudo,
            stats: player.stats.into(),
            achievements: player.achievements.into(),
        }
    }
}

impl From<Team> for TeamSummary {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            players: team.players.into_iter().map(Into::into).collect(),
        }
    }
}
