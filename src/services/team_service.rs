//! Team and roster operations backing the `/teams` routes.

use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    dto::team::{AddPlayerRequest, CreateTeamRequest, PlayerSummary, TeamSummary},
    error::ServiceError,
    state::SharedState,
};

/// Register a new, empty team.
pub fn create_team(
    state: &SharedState,
    request: CreateTeamRequest,
) -> Result<TeamSummary, ServiceError> {
    let team = state.registry().create_team(&request.name)?;
    info!(team_id = %team.id, name = %team.name, "team created");
    Ok(team.into())
}

/// Delete a team. Games already holding a snapshot of it are left as they are.
pub fn delete_team(state: &SharedState, id: Uuid) -> Result<(), ServiceError> {
    state
        .registry()
        .delete_team(id)
        .inspect_err(|err| warn!(team_id = %id, error = %err, "team deletion rejected"))?;
    info!(team_id = %id, "team deleted");
    Ok(())
}

/// Every team in creation order.
pub fn list_teams(state: &SharedState) -> Vec<TeamSummary> {
    state
        .registry()
        .list_teams()
        .into_iter()
        .map(Into::into)
        .collect()
}

/// Fetch one team.
pub fn get_team(state: &SharedState, id: Uuid) -> Result<TeamSummary, ServiceError> {
    Ok(state.registry().get_team(id)?.into())
}

/// Create a player and append it to the roster of `team_id`.
pub fn add_player(
    state: &SharedState,
    team_id: Uuid,
    request: AddPlayerRequest,
) -> Result<PlayerSummary, ServiceError> {
    let player = state
        .registry()
        .add_player(team_id, &request.pseudo)
        .inspect_err(|err| warn!(%team_id, error = %err, "player creation rejected"))?;
    info!(%team_id, player_id = %player.id, pseudo = %player.pseudo, "player added");
    Ok(player.into())
}

/// Remove a player from the roster of `team_id`.
pub fn remove_player(
    state: &SharedState,
    team_id: Uuid,
    player_id: Uuid,
) -> Result<(), ServiceError> {
    state
        .registry()
        .remove_player(team_id, player_id)
        .inspect_err(|err| warn!(%team_id, %player_id, error = %err, "player removal rejected"))?;
    info!(%team_id, %player_id, "player removed");
    Ok(())
}
