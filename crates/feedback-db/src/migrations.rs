use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 =
        conn.query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))?;

    if version < 1 {
        info!("Running migration v1 (feedbacks table)");
        // AUTOINCREMENT keeps ids from ever being reused.
        conn.execute_batch(
            "
            CREATE TABLE feedbacks (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                name        TEXT NOT NULL,
                content     TEXT NOT NULL,
                created_at  TEXT DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
            );

            CREATE INDEX idx_feedbacks_created_at
                ON feedbacks(created_at);

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    if version < 2 {
        info!("Running migration v2 (order feedbacks by parsed time)");
        // created_at may hold several text formats; index the parsed value
        // that the list query sorts on.
        conn.execute_batch(
            "
            DROP INDEX IF EXISTS idx_feedbacks_created_at;

            CREATE INDEX idx_feedbacks_created_jd
                ON feedbacks(julianday(created_at));

            INSERT INTO schema_version (version) VALUES (2);
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
