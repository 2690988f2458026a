use std::fmt;

use crate::utils::errors::DomainError;

const MAX_QUERY_CHARS: usize = 100;

/// A validated search term. Construction is the only way to obtain one, so a
/// `SearchQuery` in hand is always trimmed and 1 to 100 characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    value: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation_with_user_message(
                "Search query cannot be empty",
                "Please enter a search term.",
            ));
        }
        if trimmed.chars().count() > MAX_QUERY_CHARS {
            return Err(DomainError::validation_with_user_message(
                "Search query is too long",
                "Please enter a shorter search term.",
            ));
        }
        Ok(SearchQuery {
            value: trimmed.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
