use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the esports registry.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::teams::create_team,
        crate::routes::teams::list_teams,
        crate::routes::teams::get_team,
        crate::routes::teams::delete_team,
        crate::routes::teams::add_player,
        crate::routes::teams::remove_player,
        crate::routes::games::create_game,
        crate::routes::games::list_games,
        crate::routes::games::get_game,
        crate::routes::games::stop_game,
        crate::routes::games::mark_winner,
        crate::routes::games::increment_player_stat,
        crate::routes::games::player_stats,
        crate::routes::games::player_achievements,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::team::CreateTeamRequest,
            crate::dto::team::AddPlayerRequest,
            crate::dto::team::TeamSummary,
            crate::dto::team::PlayerSummary,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::MarkWinnerRequest,
            crate::dto::game::GameSummary,
            crate::dto::game::GameStatus,
            crate::dto::stats::StatsSummary,
            crate::dto::stats::AchievementsSummary,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "teams", description = "Team and roster management"),
        (name = "games", description = "Game lifecycle, stats and achievements"),
    )
)]
/// OpenAPI document covering every route.
pub struct ApiDoc;
