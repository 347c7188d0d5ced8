use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Mutex;
use tracing::warn;

use feedback_types::api::CreateFeedbackRequest;
use feedback_types::messages;
use feedback_types::models::Feedback;

use crate::cache::ListCache;
use crate::client::FeedbackClient;
use crate::error::ClientError;
use crate::notify::{Notification, Notifier};

/// Client-side state behind the feedback page: the cached list and the
/// submit action.
///
/// At most one create runs at a time; a second `submit` while one is in
/// flight returns [`ClientError::Busy`] without touching the network.
pub struct FeedbackBoard<N> {
    client: FeedbackClient,
    cache: Mutex<ListCache>,
    submitting: AtomicBool,
    notifier: N,
}

impl<N: Notifier> FeedbackBoard<N> {
    pub fn new(client: FeedbackClient, notifier: N) -> Self {
        Self {
            client,
            cache: Mutex::new(ListCache::new()),
            submitting: AtomicBool::new(false),
            notifier,
        }
    }

    /// Cached list, fetched from the server when missing or invalidated.
    pub async fn feedbacks(&self) -> Result<Vec<Feedback>, ClientError> {
        {
            let cache = self.cache.lock().await;
            if !cache.is_stale() {
                if let Some(entries) = cache.get() {
                    return Ok(entries.to_vec());
                }
            }
        }
        self.refetch().await
    }

    /// Fetch from the server and replace the cache.
    pub async fn refetch(&self) -> Result<Vec<Feedback>, ClientError> {
        let feedbacks = self.client.list().await.inspect_err(|e| {
            warn!("Fetching feedbacks failed: {:?}", e);
        })?;
        self.cache.lock().await.set(feedbacks.clone());
        Ok(feedbacks)
    }

    pub async fn invalidate(&self) {
        self.cache.lock().await.invalidate();
    }

    /// Whether the submit control should be disabled.
    pub fn is_submitting(&self) -> bool {
        self.submitting.load(Ordering::Acquire)
    }

    /// Create an entry and refresh the list.
    ///
    /// Success and failure are both reported through the notifier. A failed
    /// refresh after a successful create is only logged; the list catches
    /// up on the next read.
    pub async fn submit(&self, req: CreateFeedbackRequest) -> Result<Feedback, ClientError> {
        let Some(_guard) = InFlight::acquire(&self.submitting) else {
            return Err(ClientError::Busy);
        };

        match self.client.create(&req).await {
            Ok(feedback) => {
                self.invalidate().await;
                self.notifier.notify(Notification::success(
                    messages::CREATED_TITLE,
                    messages::CREATED_DESCRIPTION,
                ));
                if let Err(e) = self.refetch().await {
                    warn!("Refresh after create failed: {}", e);
                }
                Ok(feedback)
            }
            Err(e) => {
                self.notifier
                    .notify(Notification::error(messages::CREATE_ERROR_TITLE, e.to_string()));
                Err(e)
            }
        }
    }
}

/// Holds the submit flag; released on drop so a cancelled submit does not
/// leave the board stuck.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
