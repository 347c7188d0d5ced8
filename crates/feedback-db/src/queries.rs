use anyhow::{Context, Result};
use rusqlite::{Connection, Row};

use crate::Database;
use crate::models::FeedbackRow;

const FEEDBACK_COLUMNS: &str = "id, name, content, created_at";

impl Database {
    /// Insert a row and return it as stored, generated columns included.
    pub fn insert_feedback(&self, name: &str, content: &str, created_at: &str) -> Result<FeedbackRow> {
        self.with_conn_mut(|conn| {
            let row = conn
                .query_row(
                    &format!(
                        "INSERT INTO feedbacks (name, content, created_at) VALUES (?1, ?2, ?3)
                         RETURNING {}",
                        FEEDBACK_COLUMNS
                    ),
                    (name, content, created_at),
                    feedback_from_row,
                )
                .context("Failed to insert feedback")?;
            Ok(row)
        })
    }

    /// All rows, newest first. Equal timestamps fall back to the higher id.
    ///
    /// Timestamps are compared as times, not text, so rows written in other
    /// formats (SQLite's `YYYY-MM-DD HH:MM:SS`, millisecond defaults) still
    /// sort correctly. Rows without a timestamp come last.
    pub fn get_feedbacks(&self) -> Result<Vec<FeedbackRow>> {
        self.with_conn(query_feedbacks)
    }
}

fn query_feedbacks(conn: &Connection) -> Result<Vec<FeedbackRow>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {} FROM feedbacks ORDER BY julianday(created_at) DESC, id DESC",
        FEEDBACK_COLUMNS
    ))?;

    let rows = stmt
        .query_map([], feedback_from_row)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .context("Failed to read feedbacks")?;

    Ok(rows)
}

fn feedback_from_row(row: &Row<'_>) -> rusqlite::Result<FeedbackRow> {
    Ok(FeedbackRow {
        id: row.get(0)?,
        name: row.get(1)?,
        content: row.get(2)?,
        created_at: row.get(3)?,
    })
}
