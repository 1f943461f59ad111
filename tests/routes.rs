//! Handler-level tests calling the axum handlers with hand-built extractors,
//! plus a few requests sent through the full router.

use axum::{
    Json,
    body::{Body, to_bytes},
    extract::{Path, State},
    http::{Request, StatusCode, header},
    response::IntoResponse,
};
use esports_registry::{
    config::AppConfig,
    dto::{
        game::{CreateGameRequest, GameStatus, MarkWinnerRequest},
        team::{AddPlayerRequest, CreateTeamRequest, TeamSummary},
    },
    error::AppError,
    routes::{self, extract::ValidJson, games, health, teams},
    state::{AppState, SharedState},
};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

async fn create_team(state: &SharedState, name: &str, players: usize) -> TeamSummary {
    let Json(team) = teams::create_team(
        State(state.clone()),
        ValidJson(CreateTeamRequest { name: name.into() }),
    )
    .await
    .unwrap();

    for index in 1..=players {
        let Json(player) = teams::add_player(
            State(state.clone()),
            Path(team.id),
            ValidJson(AddPlayerRequest {
                pseudo: format!("{name}{index}"),
            }),
        )
        .await
        .unwrap();
        assert_eq!(player.pseudo, format!("{name}{index}"));
    }

    let Json(team) = teams::get_team(State(state.clone()), Path(team.id))
        .await
        .unwrap();
    team
}

fn status_of(err: AppError) -> StatusCode {
    err.into_response().status()
}

#[tokio::test]
async fn team_crud_round_trip() {
    let state = AppState::new(AppConfig::default());
    let team = create_team(&state, "Liquid", 2).await;
    assert_eq!(team.players.len(), 2);
    assert_eq!(team.players[0].pseudo, "Liquid1");

    let Json(listed) = teams::list_teams(State(state.clone())).await;
    assert_eq!(listed.len(), 1);

    let removed = team.players[0].id;
    let status = teams::remove_player(State(state.clone()), Path((team.id, removed)))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let err = teams::remove_player(State(state.clone()), Path((team.id, removed)))
        .await
        .unwrap_err();
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);

    let status = teams::delete_team(State(state.clone()), Path(team.id))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let err = teams::delete_team(State(state.clone()), Path(team.id))
        .await
        .unwrap_err();
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn blank_names_are_bad_requests() {
    let state = AppState::new(AppConfig::default());
    let err = teams::create_team(
        State(state.clone()),
        ValidJson(CreateTeamRequest { name: "  ".into() }),
    )
    .await
    .unwrap_err();
    assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

    let err = teams::add_player(
        State(state.clone()),
        Path(Uuid::new_v4()),
        ValidJson(AddPlayerRequest {
            pseudo: "ghost".into(),
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn game_lifecycle_over_handlers() {
    let state = AppState::new(AppConfig::default());
    let blue = create_team(&state, "Blue", 3).await;
    let red = create_team(&state, "Red", 3).await;

    let Json(game) = games::create_game(
        State(state.clone()),
        ValidJson(CreateGameRequest {
            name: "Finals".into(),
            team1_id: blue.id,
            team2_id: red.id,
        }),
    )
    .await
    .unwrap();
    assert_eq!(game.status, GameStatus::Open);
    assert!(game.stop_time.is_none());

    let player_id = game.team1.players[0].id;
    let Json(player) = games::increment_player_stat(
        State(state.clone()),
        Path((game.id, player_id, "attemptedAttacks".into())),
    )
    .await
    .unwrap();
    assert_eq!(player.stats.attempted_attacks, 1);

    let err = games::increment_player_stat(
        State(state.clone()),
        Path((game.id, player_id, "totalWins".into())),
    )
    .await
    .unwrap_err();
    assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

    let Json(stopped) = games::stop_game(State(state.clone()), Path(game.id))
        .await
        .unwrap();
    assert_eq!(stopped.status, GameStatus::Stopped);
    assert!(stopped.stop_time.is_some());
    assert!(stopped.duration_seconds.is_some());

    let err = games::stop_game(State(state.clone()), Path(game.id))
        .await
        .unwrap_err();
    assert_eq!(status_of(err), StatusCode::CONFLICT);

    let err = games::increment_player_stat(
        State(state.clone()),
        Path((game.id, player_id, "hits".into())),
    )
    .await
    .unwrap_err();
    assert_eq!(status_of(err), StatusCode::CONFLICT);

    let Json(with_winner) = games::mark_winner(
        State(state.clone()),
        Path(game.id),
        ValidJson(MarkWinnerRequest { team_id: blue.id }),
    )
    .await
    .unwrap();
    assert_eq!(with_winner.winner, Some(blue.id));

    let Json(stats) = games::player_stats(State(state.clone()), Path((game.id, player_id)))
        .await
        .unwrap();
    assert_eq!(stats.total_games_played, 1);
    assert_eq!(stats.total_wins, 1);

    let Json(achievements) =
        games::player_achievements(State(state.clone()), Path((game.id, player_id)))
            .await
            .unwrap();
    assert!(!achievements.sharpshooter);

    let Json(all_games) = games::list_games(State(state.clone())).await;
    assert_eq!(all_games.len(), 1);

    let Json(health) = health::healthcheck(State(state.clone())).await;
    assert_eq!(health.status, "ok");
    assert_eq!((health.teams, health.games), (2, 1));
}

#[tokio::test]
async fn uneven_teams_are_rejected() {
    let state = AppState::new(AppConfig::default());
    let small = create_team(&state, "Small", 3).await;
    let large = create_team(&state, "Large", 4).await;

    let err = games::create_game(
        State(state.clone()),
        ValidJson(CreateGameRequest {
            name: "Mismatch".into(),
            team1_id: small.id,
            team2_id: large.id,
        }),
    )
    .await
    .unwrap_err();
    assert_eq!(status_of(err), StatusCode::BAD_REQUEST);

    let Json(all_games) = games::list_games(State(state.clone())).await;
    assert!(all_games.is_empty());
}

#[tokio::test]
async fn game_summary_serializes_snake_case_fields() {
    let state = AppState::new(AppConfig::default());
    let a = create_team(&state, "A", 3).await;
    let b = create_team(&state, "B", 3).await;

    let Json(game) = games::create_game(
        State(state.clone()),
        ValidJson(CreateGameRequest {
            name: "Showmatch".into(),
            team1_id: a.id,
            team2_id: b.id,
        }),
    )
    .await
    .unwrap();

    let value = serde_json::to_value(&game).unwrap();
    assert_eq!(value["name"], "Showmatch");
    assert_eq!(value["status"], "open");
    assert!(value["stop_time"].is_null());
    assert!(value["start_time"].is_string());
    assert!(value.get("winner").is_none());
    assert_eq!(value["team1"]["players"].as_array().unwrap().len(), 3);

    let player = &value["team2"]["players"][0];
    assert_eq!(player["stats"]["damage_done"], 0);
    assert_eq!(player["achievements"]["big_winner"], false);
}

async fn send(
    state: &SharedState,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = routes::router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn rejected_bodies_carry_a_json_message() {
    let state = AppState::new(AppConfig::default());

    let (status, body) = send(&state, "POST", "/teams", Some(json!({ "name": "   " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"));

    let (status, body) = send(&state, "POST", "/teams", Some(json!({ "label": "Liquid" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, team) = send(&state, "POST", "/teams", Some(json!({ "name": "Liquid" }))).await;
    assert_eq!(status, StatusCode::OK);
    let uri = format!("/teams/{}/players", team["id"].as_str().unwrap());
    let (status, body) = send(&state, "POST", &uri, Some(json!({ "pseudo": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());

    let (status, body) = send(
        &state,
        "POST",
        "/games",
        Some(json!({
            "name": " ",
            "team1_id": Uuid::new_v4(),
            "team2_id": Uuid::new_v4(),
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn player_reads_on_unknown_game_or_player_are_not_found() {
    let state = AppState::new(AppConfig::default());
    let blue = create_team(&state, "Blue", 3).await;
    let red = create_team(&state, "Red", 3).await;
    let Json(game) = games::create_game(
        State(state.clone()),
        ValidJson(CreateGameRequest {
            name: "Finals".into(),
            team1_id: blue.id,
            team2_id: red.id,
        }),
    )
    .await
    .unwrap();
    let player_id = game.team1.players[0].id;

    let err = games::player_stats(State(state.clone()), Path((Uuid::new_v4(), player_id)))
        .await
        .unwrap_err();
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);

    let err = games::player_achievements(State(state.clone()), Path((game.id, Uuid::new_v4())))
        .await
        .unwrap_err();
    assert_eq!(status_of(err), StatusCode::NOT_FOUND);

    let uri = format!("/games/{}/players/{}/stats", game.id, Uuid::new_v4());
    let (status, body) = send(&state, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("not found"));
}
