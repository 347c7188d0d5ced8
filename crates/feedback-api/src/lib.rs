pub mod error;
pub mod feedbacks;
pub mod health;

use std::sync::Arc;

use axum::{Router, routing::get};

use feedback_db::FeedbackStore;
use feedback_types::api::{FEEDBACKS_PATH, HEALTH_PATH};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub store: Box<dyn FeedbackStore>,
}

impl AppStateInner {
    pub fn new(store: impl FeedbackStore + 'static) -> AppState {
        Arc::new(Self {
            store: Box::new(store),
        })
    }
}

/// All API routes, without transport layers (CORS, tracing, static files).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            FEEDBACKS_PATH,
            get(feedbacks::list_feedbacks).post(feedbacks::create_feedback),
        )
        .route(HEALTH_PATH, get(health::health))
        .with_state(state)
}
