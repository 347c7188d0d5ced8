use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::Value;
use tracing::{info, warn};

use feedback_types::api::CreateFeedbackRequest;
use feedback_types::models::Feedback;
use feedback_types::validation::validate;

use crate::AppState;
use crate::error::ApiError;

/// GET /api/feedbacks — every entry, newest first.
pub async fn list_feedbacks(
    State(state): State<AppState>,
) -> Result<Json<Vec<Feedback>>, ApiError> {
    let feedbacks = run_blocking(state, |state| state.store.list_feedbacks()).await?;
    Ok(Json(feedbacks))
}

/// POST /api/feedbacks — validate, persist, and echo the stored record.
pub async fn create_feedback(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Feedback>), ApiError> {
    // Only bodies that are not JSON at all skip field validation.
    let Json(body) = payload.map_err(|rejection| {
        warn!("Rejected create body: {}", rejection.body_text());
        ApiError::MalformedBody(rejection.body_text())
    })?;
    let req = CreateFeedbackRequest::from_json(body);

    let input = validate(&req).inspect_err(|e| warn!("Invalid feedback: {}", e))?;

    let feedback = run_blocking(state, move |state| state.store.create_feedback(&input)).await?;
    info!("Feedback {} created", feedback.id);

    Ok((StatusCode::CREATED, Json(feedback)))
}

/// Run a storage call off the async runtime.
async fn run_blocking<F, T>(state: AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&AppState) -> anyhow::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| anyhow::anyhow!("spawn_blocking join error: {}", e))?;
    Ok(result?)
}
