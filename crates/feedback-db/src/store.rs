use anyhow::Result;
use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use tracing::warn;

use feedback_types::models::{Feedback, NewFeedback};

use crate::Database;
use crate::models::FeedbackRow;

/// Persistence boundary for feedback records.
///
/// Implementations own ordering: `list_feedbacks` returns newest first.
/// Errors are not retried here; callers surface them as server errors.
pub trait FeedbackStore: Send + Sync {
    fn list_feedbacks(&self) -> Result<Vec<Feedback>>;

    /// Persist `input`, assigning `id` and `created_at`.
    fn create_feedback(&self, input: &NewFeedback) -> Result<Feedback>;
}

impl FeedbackStore for Database {
    fn list_feedbacks(&self) -> Result<Vec<Feedback>> {
        let rows = self.get_feedbacks()?;
        Ok(rows.into_iter().map(into_feedback).collect())
    }

    fn create_feedback(&self, input: &NewFeedback) -> Result<Feedback> {
        // Microsecond precision so "created_at >= request time" holds.
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let row = self.insert_feedback(input.name(), input.content(), &now)?;
        Ok(into_feedback(row))
    }
}

fn into_feedback(row: FeedbackRow) -> Feedback {
    let created_at = row.created_at.as_deref().and_then(|raw| {
        parse_timestamp(raw)
            .map_err(|e| warn!("Corrupt created_at '{}' on feedback {}: {}", raw, row.id, e))
            .ok()
    });

    Feedback {
        id: row.id,
        name: row.name,
        content: row.content,
        created_at,
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    raw.parse::<DateTime<Utc>>().or_else(|_| {
        // SQLite's datetime('now') has no timezone; treat it as UTC.
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_types::api::CreateFeedbackRequest;
    use feedback_types::validation::validate;

    fn input(name: &str, content: &str) -> NewFeedback {
        validate(&CreateFeedbackRequest::new(name, content)).unwrap()
    }

    #[test]
    fn create_then_list_round_trips() {
        let db = Database::open_in_memory().unwrap();
        let before = Utc::now();

        let created = db.create_feedback(&input("Kim", "Great app")).unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Kim");
        assert_eq!(created.content, "Great app");
        let created_at = created.created_at.unwrap();
        assert!(created_at.timestamp_micros() >= before.timestamp_micros());

        assert_eq!(db.list_feedbacks().unwrap(), vec![created]);
    }

    #[test]
    fn lists_n_records_newest_first() {
        let db = Database::open_in_memory().unwrap();
        for i in 0..5 {
            db.create_feedback(&input(&format!("user{}", i), "hi")).unwrap();
        }

        let list = db.list_feedbacks().unwrap();
        assert_eq!(list.len(), 5);
        for pair in list.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn reading_twice_returns_identical_results() {
        let db = Database::open_in_memory().unwrap();
        db.create_feedback(&input("a", "b")).unwrap();
        assert_eq!(db.list_feedbacks().unwrap(), db.list_feedbacks().unwrap());
    }

    #[test]
    fn parses_legacy_sqlite_timestamps() {
        let ts = parse_timestamp("2024-03-01 12:30:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-01T12:30:00+00:00");
    }

    #[test]
    fn corrupt_timestamp_becomes_none() {
        let feedback = into_feedback(FeedbackRow {
            id: 9,
            name: "a".into(),
            content: "b".into(),
            created_at: Some("yesterday".into()),
        });
        assert!(feedback.created_at.is_none());
    }
}
