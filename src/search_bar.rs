/// Query text behind the search input
#[derive(Debug, Clone, Default)]
pub struct SearchBar {
    query: String,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Mirror a voice transcript into the input; empty transcripts leave it alone
    pub fn apply_transcript(&mut self, transcript: &str) {
        if !transcript.is_empty() {
            self.query = transcript.to_string();
        }
    }

    /// The query to search for, or `None` when the input is blank
    pub fn submit(&self) -> Option<String> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }
}
