//! Game operations backing the `/games` routes: creation, stop, winner
//! marking and per-player stat tracking on the game snapshots.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    dto::{
        game::{CreateGameRequest, GameSummary, MarkWinnerRequest},
        stats::{AchievementsSummary, StatsSummary},
        team::PlayerSummary,
    },
    error::ServiceError,
    state::SharedState,
};

/// Start a game between snapshots of two registered teams.
pub fn create_game(
    state: &SharedState,
    request: CreateGameRequest,
) -> Result<GameSummary, ServiceError> {
    let CreateGameRequest {
        name,
        team1_id,
        team2_id,
    } = request;

    let game = state
        .registry()
        .create_game(&name, team1_id, team2_id)
        .inspect_err(|err| {
            warn!(%team1_id, %team2_id, error = %err, "game creation rejected");
        })?;
    info!(
        game_id = %game.id,
        name = %game.name,
        %team1_id,
        %team2_id,
        players_per_team = game.team1.size(),
        "game started"
    );
    Ok(game.into())
}

/// Every game in creation order.
pub fn list_games(state: &SharedState) -> Vec<GameSummary> {
    state
        .registry()
        .list_games()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Fetch one game.
pub fn get_game(state: &SharedState, id: Uuid) -> Result<GameSummary, ServiceError> {
    Ok(state.registry().get_game(id)?.into())
}

/// Stop an open game, folding its duration into every participant's stats.
pub fn stop_game(state: &SharedState, id: Uuid) -> Result<GameSummary, ServiceError> {
    let game = state
        .registry()
        .stop_game(id)
        .inspect_err(|err| warn!(game_id = %id, error = %err, "game stop rejected"))?;
    info!(
        game_id = %id,
        duration_seconds = game.duration().unwrap_or_default(),
        "game stopped"
    );
    Ok(game.into())
}

/// Credit the win of a stopped game to one of its sides.
pub fn mark_winner(
    state: &SharedState,
    game_id: Uuid,
    request: MarkWinnerRequest,
) -> Result<GameSummary, ServiceError> {
    let team_id = request.team_id;
    let game = state
        .registry()
        .mark_winner(game_id, team_id)
        .inspect_err(|err| warn!(%game_id, %team_id, error = %err, "winner marking rejected"))?;
    info!(%game_id, %team_id, "winner marked");
    Ok(game.into())
}

/// Increment the named counter on a player's in-game copy.
pub fn increment_player_stat(
    state: &SharedState,
    game_id: Uuid,
    player_id: Uuid,
    stat: &str,
) -> Result<PlayerSummary, ServiceError> {
    let player = state
        .registry()
        .increment_player_stat(game_id, player_id, stat)
        .inspect_err(|err| {
            warn!(%game_id, %player_id, stat, error = %err, "stat increment rejected");
        })?;
    debug!(%game_id, %player_id, stat, "stat incremented");
    Ok(player.into())
}

/// Counters of a participant in one game.
pub fn player_stats(
    state: &SharedState,
    game_id: Uuid,
    player_id: Uuid,
) -> Result<StatsSummary, ServiceError> {
    Ok(state.registry().get_player_stats(game_id, player_id)?.into())
}

/// Achievement flags of a participant in one game.
pub fn player_achievements(
    state: &SharedState,
    game_id: Uuid,
    player_id: Uuid,
) -> Result<AchievementsSummary, ServiceError> {
    Ok(state
        .registry()
        .get_player_achievements(game_id, player_id)?
        .into())
}
