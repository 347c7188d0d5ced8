use feedback_types::models::Feedback;

/// Last fetched list, owned by the board.
///
/// Stale entries stay readable so a display can keep showing them while a
/// refetch is in flight.
#[derive(Debug, Default)]
pub struct ListCache {
    entries: Option<Vec<Feedback>>,
    stale: bool,
}

impl ListCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<&[Feedback]> {
        self.entries.as_deref()
    }

    pub fn set(&mut self, entries: Vec<Feedback>) {
        self.entries = Some(entries);
        self.stale = false;
    }

    /// Force the next read to go to the server.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale || self.entries.is_none()
    }
}
