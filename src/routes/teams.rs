use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
};
use uuid::Uuid;

use crate::{
    dto::team::{AddPlayerRequest, CreateTeamRequest, PlayerSummary, TeamSummary},
    error::AppError,
    routes::extract::ValidJson,
    services::team_service,
    state::SharedState,
};

/// Routes managing teams and their rosters.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route("/teams/{id}", get(get_team).delete(delete_team))
        .route("/teams/{id}/players", post(add_player))
        .route("/teams/{team_id}/players/{player_id}", delete(remove_player))
}

/// Register a new team with an empty roster.
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 200, description = "Team created", body = TeamSummary),
        (status = 400, description = "Blank team name")
    )
)]
pub async fn create_team(
    State(state): State<SharedState>,
    ValidJson(payload): ValidJson<CreateTeamRequest>,
) -> Result<Json<TeamSummary>, AppError> {
    Ok(Json(team_service::create_team(&state, payload)?))
}

/// List every registered team in creation order.
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses((status = 200, description = "Registered teams", body = [TeamSummary]))
)]
pub async fn list_teams(State(state): State<SharedState>) -> Json<Vec<TeamSummary>> {
    Json(team_service::list_teams(&state))
}

/// Retrieve a team by its ID.
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = Uuid, Path, description = "Identifier of the team")),
    responses(
        (status = 200, description = "Team", body = TeamSummary),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn get_team(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeamSummary>, AppError> {
    Ok(Json(team_service::get_team(&state, id)?))
}

/// Delete a team. Games already started with it are unaffected.
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = Uuid, Path, description = "Identifier of the team to delete")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn delete_team(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    team_service::delete_team(&state, id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a player to a team roster.
#[utoipa::path(
    post,
    path = "/teams/{id}/players",
    tag = "teams",
    params(("id" = Uuid, Path, description = "Identifier of the team")),
    request_body = AddPlayerRequest,
    responses(
        (status = 200, description = "Player created", body = PlayerSummary),
        (status = 400, description = "Blank pseudo"),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn add_player(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<AddPlayerRequest>,
) -> Result<Json<PlayerSummary>, AppError> {
    Ok(Json(team_service::add_player(&state, id, payload)?))
}

/// Remove a player from a team roster.
#[utoipa::path(
    delete,
    path = "/teams/{team_id}/players/{player_id}",
    tag = "teams",
    params(
        ("team_id" = Uuid, Path, description = "Identifier of the team"),
        ("player_id" = Uuid, Path, description = "Identifier of the player to remove")
    ),
    responses(
        (status = 204, description = "Player removed"),
        (status = 404, description = "Unknown team or player")
    )
)]
pub async fn remove_player(
    State(state): State<SharedState>,
    Path((team_id, player_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    team_service::remove_player(&state, team_id, player_id)?;
    Ok(StatusCode::NO_CONTENT)
}
