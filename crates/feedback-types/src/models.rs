use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single submitted comment as stored and served by the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub content: String,
    /// Assigned by the server at insert time. Rows written outside the
    /// server may leave it empty, in which case it serializes as `null`.
    pub created_at: Option<DateTime<Utc>>,
}

/// Input that already passed validation and may be handed to storage.
///
/// Only [`crate::validation::validate`] constructs this, so storage never
/// sees an empty `name` or `content`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub(crate) name: String,
    pub(crate) content: String,
}

impl NewFeedback {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Most recent first. A missing timestamp sorts as the oldest possible value.
///
/// The sort is stable, so entries with equal timestamps keep the order they
/// arrived in.
pub fn sort_newest_first(feedbacks: &mut [Feedback]) {
    feedbacks.sort_by_key(|f| std::cmp::Reverse(sort_key(f)));
}

fn sort_key(feedback: &Feedback) -> i64 {
    feedback
        .created_at
        .map(|ts| ts.timestamp_micros())
        .unwrap_or(0)
}
