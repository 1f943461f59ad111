/// OpenAPI documentation generation.
pub mod documentation;
/// Game lifecycle, stat tracking and winner marking.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Team and roster management.
pub mod team_service;
