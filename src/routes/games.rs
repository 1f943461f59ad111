use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::{
        game::{CreateGameRequest, GameSummary, MarkWinnerRequest},
        stats::{AchievementsSummary, StatsSummary},
        team::PlayerSummary,
    },
    error::AppError,
    routes::extract::ValidJson,
    services::game_service,
    state::SharedState,
};

/// Routes driving the game lifecycle and in-game stats.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route("/games/{id}", get(get_game).delete(stop_game))
        .route("/games/{id}/winner", post(mark_winner))
        .route(
            "/games/{game_id}/players/{player_id}/stats",
            get(player_stats),
        )
        .route(
            "/games/{game_id}/players/{player_id}/stats/{stat}",
            post(increment_player_stat),
        )
        .route(
            "/games/{game_id}/players/{player_id}/achievements",
            get(player_achievements),
        )
}

/// Start a game between two registered teams of equal, valid size.
#[utoipa::path(
    post,
    path = "/games",
    tag = "games",
    request_body = CreateGameRequest,
    responses(
        (status = 200, description = "Game started", body = GameSummary),
        (status = 400, description = "Blank name, identical teams or invalid team sizes"),
        (status = 404, description = "Unknown team")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    ValidJson(payload): ValidJson<CreateGameRequest>,
) -> Result<Json<GameSummary>, AppError> {
    Ok(Json(game_service::create_game(&state, payload)?))
}

/// List every game in creation order.
#[utoipa::path(
    get,
    path = "/games",
    tag = "games",
    responses((status = 200, description = "Games", body = [GameSummary]))
)]
pub async fn list_games(State(state): State<SharedState>) -> Json<Vec<GameSummary>> {
    Json(game_service::list_games(&state))
}

/// Retrieve a game by its ID.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = "games",
    params(("id" = Uuid, Path, description = "Identifier of the game")),
    responses(
        (status = 200, description = "Game", body = GameSummary),
        (status = 404, description = "Unknown game")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameSummary>, AppError> {
    Ok(Json(game_service::get_game(&state, id)?))
}

/// Stop an open game and return its final state.
#[utoipa::path(
    delete,
    path = "/games/{id}",
    tag = "games",
    params(("id" = Uuid, Path, description = "Identifier of the game to stop")),
    responses(
        (status = 200, description = "Game stopped", body = GameSummary),
        (status = 404, description = "Unknown game"),
        (status = 409, description = "Game already stopped")
    )
)]
pub async fn stop_game(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<GameSummary>, AppError> {
    Ok(Json(game_service::stop_game(&state, id)?))
}

/// Credit the win of a stopped game to one of its teams.
#[utoipa::path(
    post,
    path = "/games/{id}/winner",
    tag = "games",
    params(("id" = Uuid, Path, description = "Identifier of the stopped game")),
    request_body = MarkWinnerRequest,
    responses(
        (status = 200, description = "Winner recorded", body = GameSummary),
        (status = 400, description = "Team does not play in this game"),
        (status = 404, description = "Unknown game"),
        (status = 409, description = "Game still open or winner already recorded")
    )
)]
pub async fn mark_winner(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    ValidJson(payload): ValidJson<MarkWinnerRequest>,
) -> Result<Json<GameSummary>, AppError> {
    Ok(Json(game_service::mark_winner(&state, id, payload)?))
}

/// Increment one action counter of a player in an open game.
#[utoipa::path(
    post,
    path = "/games/{game_id}/players/{player_id}/stats/{stat}",
    tag = "games",
    params(
        ("game_id" = Uuid, Path, description = "Identifier of the game"),
        ("player_id" = Uuid, Path, description = "Identifier of the player"),
        ("stat" = String, Path, description = "Counter to increment, e.g. `damageDone`")
    ),
    responses(
        (status = 200, description = "Updated player", body = PlayerSummary),
        (status = 400, description = "Unknown or non-incrementable stat"),
        (status = 404, description = "Unknown game or player"),
        (status = 409, description = "Game already stopped")
    )
)]
pub async fn increment_player_stat(
    State(state): State<SharedState>,
    Path((game_id, player_id, stat)): Path<(Uuid, Uuid, String)>,
) -> Result<Json<PlayerSummary>, AppError> {
    Ok(Json(game_service::increment_player_stat(
        &state, game_id, player_id, &stat,
    )?))
}

/// Read a player's stats as recorded in a game.
#[utoipa::path(
    get,
    path = "/games/{game_id}/players/{player_id}/stats",
    tag = "games",
    params(
        ("game_id" = Uuid, Path, description = "Identifier of the game"),
        ("player_id" = Uuid, Path, description = "Identifier of the player")
    ),
    responses(
        (status = 200, description = "Player stats", body = StatsSummary),
        (status = 404, description = "Unknown game or player")
    )
)]
pub async fn player_stats(
    State(state): State<SharedState>,
    Path((game_id, player_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<StatsSummary>, AppError> {
    Ok(Json(game_service::player_stats(&state, game_id, player_id)?))
}

/// Read a player's achievements as recorded in a game.
#[utoipa::path(
    get,
    path = "/games/{game_id}/players/{player_id}/achievements",
    tag = "games",
    params(
        ("game_id" = Uuid, Path, description = "Identifier of the game"),
        ("player_id" = Uuid, Path, description = "Identifier of the player")
    ),
    responses(
        (status = 200, description = "Player achievements", body = AchievementsSummary),
        (status = 404, description = "Unknown game or player")
    )
)]
pub async fn player_achievements(
    State(state): State<SharedState>,
    Path((game_id, player_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AchievementsSummary>, AppError> {
    Ok(Json(game_service::player_achievements(
        &state, game_id, player_id,
    )?))
}
