// src/domain/article/specifications.rs

/// Fixed, typed listing predicate: the only two knobs the store accepts.
/// Empty or whitespace-only search terms are normalized away at
/// construction so repositories never see a degenerate pattern.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub published_only: bool,
    search: Option<String>,
}

impl ArticleFilter {
    pub fn published() -> Self {
        Self {
            published_only: true,
            search: None,
        }
    }

    pub fn all() -> Self {
        Self {
            published_only: false,
            search: None,
        }
    }

    pub fn with_search(mut self, term: Option<String>) -> Self {
        self.search = term
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        self
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }
}
