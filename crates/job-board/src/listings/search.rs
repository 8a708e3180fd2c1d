use serde::{Deserialize, Serialize};

/// The pair handed to the filter pipeline on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keyword: String,
    pub location: String,
}

/// Draft keyword/location fields. Edits stay local until [`SearchInput::submit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    keyword: String,
    location: String,
}

impl SearchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from deep-link parameters. Only meaningful at page initialisation.
    pub fn seeded(keyword: Option<&str>, location: Option<&str>) -> Self {
        Self {
            keyword: keyword.unwrap_or_default().to_string(),
            location: location.unwrap_or_default().to_string(),
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn clear(&mut self) {
        self.keyword.clear();
        self.location.clear();
    }

    pub fn submit(&self) -> SearchQuery {
        SearchQuery {
            keyword: self.keyword.clone(),
            location: self.location.clone(),
        }
    }
}
