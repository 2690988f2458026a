use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{SearchQuery, User};
use crate::usecase::sequence::RequestSequence;
use crate::utils::errors::DomainError;

/// Port implemented by the GitHub search adapter.
#[async_trait]
pub trait UserSearcher: Send + Sync {
    async fn search_users(&self, query: &SearchQuery) -> Result<Vec<User>, DomainError>;
}

pub struct SearchUsersUseCase {
    searcher: Arc<dyn UserSearcher>,
    sequence: RequestSequence,
}

impl SearchUsersUseCase {
    pub fn new(searcher: Arc<dyn UserSearcher>) -> Self {
        SearchUsersUseCase {
            searcher,
            sequence: RequestSequence::new(),
        }
    }

    /// Validates the raw input, then returns whatever the adapter found,
    /// unmodified. No matches is a successful empty result, not an error.
    pub async fn execute(&self, raw_query: &str) -> Result<Vec<User>, DomainError> {
        let query = SearchQuery::new(raw_query)?;
        debug!("Searching users for query: {}", query);
        self.searcher.search_users(&query).await
    }

    /// Latest-wins variant for callers that fire overlapping searches.
    /// When a newer search started while this one was in flight, its
    /// outcome is discarded (errors included) and `Ok(None)` is returned.
    pub async fn execute_latest(&self, raw_query: &str) -> Result<Option<Vec<User>>, DomainError> {
        let ticket = self.sequence.issue();
        let result = self.execute(raw_query).await;
        if !self.sequence.is_current(&ticket) {
            debug!("Discarding superseded search for query: {}", raw_query);
            return Ok(None);
        }
        result.map(Some)
    }
}
