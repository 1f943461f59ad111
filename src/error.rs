use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::state::{
    game::{GameError, GameSetupError, InvalidTransition},
    team::RosterError,
};

/// Errors produced by registry and service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Referenced team, game or player does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Operation not permitted in the entity's current lifecycle state.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Conflict with current state.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidArgument(message) => AppError::BadRequest(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
            ServiceError::InvalidState(message) => AppError::Conflict(message),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(err: ValidationErrors) -> Self {
        AppError::BadRequest(format!("validation failed: {}", err))
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

impl From<RosterError> for ServiceError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::UnknownPlayer { .. } => ServiceError::NotFound(err.to_string()),
            RosterError::DuplicatePlayer { .. } => ServiceError::InvalidArgument(err.to_string()),
        }
    }
}

impl From<GameSetupError> for ServiceError {
    fn from(err: GameSetupError) -> Self {
        ServiceError::InvalidArgument(err.to_string())
    }
}

impl From<InvalidTransition> for ServiceError {
    fn from(err: InvalidTransition) -> Self {
        ServiceError::InvalidState(err.to_string())
    }
}

impl From<GameError> for ServiceError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidTransition(invalid) => invalid.into(),
            GameError::UnknownPlayer { .. } => ServiceError::NotFound(err.to_string()),
            GameError::UnknownTeam { .. } => ServiceError::InvalidArgument(err.to_string()),
            GameError::WinnerAlreadyMarked { .. } => ServiceError::InvalidState(err.to_string()),
        }
    }
}
