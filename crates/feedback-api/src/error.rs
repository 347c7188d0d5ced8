use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use feedback_types::api::ErrorResponse;
use feedback_types::messages;
use feedback_types::validation::ValidationError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(e) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(e))).into_response()
            }
            ApiError::MalformedBody(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(messages::CHECK_INPUT)),
            )
                .into_response(),
            ApiError::Internal(e) => {
                // Details stay in the log; the client only gets the generic message.
                error!("Request failed: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new(messages::SERVER_ERROR)),
                )
                    .into_response()
            }
        }
    }
}
