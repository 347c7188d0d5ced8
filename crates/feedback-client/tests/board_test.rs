use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    http::StatusCode,
    routing::get,
};
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use feedback_api::AppStateInner;
use feedback_client::notify::{Notification, NotificationVariant, Notifier};
use feedback_client::{ClientError, FeedbackBoard, FeedbackClient};
use feedback_db::Database;
use feedback_types::api::{CreateFeedbackRequest, FEEDBACKS_PATH};
use feedback_types::messages;

#[derive(Default)]
struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.seen.lock().unwrap())
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn real_server() -> String {
    let state = AppStateInner::new(Database::open_in_memory().unwrap());
    serve(feedback_api::router(state)).await
}

/// An address nothing listens on.
async fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

fn board(base_url: &str) -> (FeedbackBoard<Arc<RecordingNotifier>>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let board = FeedbackBoard::new(FeedbackClient::new(base_url).unwrap(), notifier.clone());
    (board, notifier)
}

#[tokio::test]
async fn empty_board_lists_nothing() {
    let client = FeedbackClient::new(real_server().await).unwrap();
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn submit_refreshes_list_and_notifies() {
    let (board, notifier) = board(&real_server().await);
    assert!(board.feedbacks().await.unwrap().is_empty());

    let created = board
        .submit(CreateFeedbackRequest::new("Kim", "Great app"))
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Kim");
    assert!(created.created_at.is_some());

    // Cached empty list was invalidated and refetched.
    assert_eq!(board.feedbacks().await.unwrap(), vec![created]);
    assert!(!board.is_submitting());

    let seen = notifier.take();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].variant, NotificationVariant::Success);
    assert_eq!(seen[0].title, messages::CREATED_TITLE);
}

#[tokio::test]
async fn newest_entry_comes_first() {
    let (board, _) = board(&real_server().await);
    for name in ["a", "b", "c"] {
        board.submit(CreateFeedbackRequest::new(name, "x")).await.unwrap();
    }

    let names: Vec<String> = board
        .feedbacks()
        .await
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["c", "b", "a"]);
}

#[tokio::test]
async fn invalid_input_never_reaches_the_network() {
    let (board, notifier) = board(&dead_address().await);

    let err = board
        .submit(CreateFeedbackRequest::new("", "x"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation { .. }));
    assert_eq!(err.field(), Some("name"));

    let seen = notifier.take();
    assert_eq!(
        seen,
        vec![Notification::error(messages::CREATE_ERROR_TITLE, messages::NAME_REQUIRED)]
    );
}

#[tokio::test]
async fn unreachable_server_gives_generic_messages() {
    let client = FeedbackClient::new(dead_address().await).unwrap();

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport { .. }));
    assert_eq!(err.to_string(), messages::LIST_FAILED);

    let err = client
        .create(&CreateFeedbackRequest::new("a", "b"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), messages::CREATE_FAILED);
}

#[tokio::test]
async fn server_rejection_message_is_surfaced() {
    let app = Router::new().route(
        FEEDBACKS_PATH,
        get(|| async { Json(json!([])) }).post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "내용이 너무 깁니다.", "field": "content" })),
            )
        }),
    );
    let (board, notifier) = board(&serve(app).await);

    let err = board
        .submit(CreateFeedbackRequest::new("a", "b"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Rejected(ref m) if m == "내용이 너무 깁니다."));

    let seen = notifier.take();
    assert_eq!(seen[0].variant, NotificationVariant::Error);
    assert_eq!(seen[0].description, "내용이 너무 깁니다.");
}

#[tokio::test]
async fn bad_request_without_message_uses_fallback() {
    let app = Router::new().route(
        FEEDBACKS_PATH,
        get(|| async { Json(json!([])) }).post(|| async { (StatusCode::BAD_REQUEST, "nope") }),
    );
    let client = FeedbackClient::new(serve(app).await).unwrap();

    let err = client
        .create(&CreateFeedbackRequest::new("a", "b"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), messages::CHECK_INPUT);
}

#[tokio::test]
async fn server_errors_map_to_generic_failures() {
    let app = Router::new().route(
        FEEDBACKS_PATH,
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR })
            .post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let (board, notifier) = board(&serve(app).await);

    let err = board.feedbacks().await.unwrap_err();
    assert!(matches!(err, ClientError::Failed(m) if m == messages::LIST_FAILED));

    let err = board
        .submit(CreateFeedbackRequest::new("a", "b"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Failed(m) if m == messages::CREATE_FAILED));
    assert_eq!(notifier.take()[0].description, messages::CREATE_FAILED);
}

#[tokio::test]
async fn cached_list_is_reused_until_invalidated() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let app = Router::new().route(
        FEEDBACKS_PATH,
        get(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!([
                    { "id": 1, "name": "old", "content": "x", "createdAt": null },
                    { "id": 2, "name": "new", "content": "y", "createdAt": "2024-01-01T00:00:00Z" }
                ]))
            }
        }),
    );
    let (board, _) = board(&serve(app).await);

    let first = board.feedbacks().await.unwrap();
    // Missing timestamps sort as the oldest.
    assert_eq!(first[0].name, "new");
    assert_eq!(first[1].name, "old");

    board.feedbacks().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    board.invalidate().await;
    board.feedbacks().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 2);

    board.refetch().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn second_submit_while_in_flight_is_refused() {
    let release = Arc::new(Notify::new());
    let gate = release.clone();
    let app = Router::new().route(
        FEEDBACKS_PATH,
        get(|| async { Json(json!([])) }).post(move || {
            let gate = gate.clone();
            async move {
                gate.notified().await;
                (
                    StatusCode::CREATED,
                    Json(json!({ "id": 1, "name": "a", "content": "b", "createdAt": null })),
                )
            }
        }),
    );
    let (board, _) = board(&serve(app).await);
    let board = Arc::new(board);

    let first = tokio::spawn({
        let board = board.clone();
        async move { board.submit(CreateFeedbackRequest::new("a", "b")).await }
    });

    while !board.is_submitting() {
        tokio::task::yield_now().await;
    }

    let err = board
        .submit(CreateFeedbackRequest::new("c", "d"))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Busy));

    release.notify_one();
    let created = first.await.unwrap().unwrap();
    assert_eq!(created.id, 1);
    assert!(!board.is_submitting());
}
