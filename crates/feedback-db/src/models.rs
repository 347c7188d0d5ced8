/// Database row types. These map directly to SQLite rows and are kept
/// separate from the wire types in feedback-types.

pub struct FeedbackRow {
    pub id: i64,
    pub name: String,
    pub content: String,
    pub created_at: Option<String>,
}
