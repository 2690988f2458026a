use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::{Repository, User};
use crate::usecase::sequence::RequestSequence;
use crate::utils::errors::DomainError;

/// Port implemented by the GitHub repository adapter.
#[async_trait]
pub trait RepositoryLister: Send + Sync {
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, DomainError>;
}

pub struct GetUserRepositoriesUseCase {
    lister: Arc<dyn RepositoryLister>,
    sequence: RequestSequence,
}

impl GetUserRepositoriesUseCase {
    pub fn new(lister: Arc<dyn RepositoryLister>) -> Self {
        GetUserRepositoriesUseCase {
            lister,
            sequence: RequestSequence::new(),
        }
    }

    /// Fetches the user's repositories ordered newest-first by update time.
    /// The sort is stable, so repositories sharing a timestamp keep the
    /// order the adapter returned them in.
    pub async fn execute(&self, user: &User) -> Result<Vec<Repository>, DomainError> {
        self.execute_for_login(&user.login).await
    }

    /// Same flow for callers that only hold a login.
    pub async fn execute_for_login(&self, login: &str) -> Result<Vec<Repository>, DomainError> {
        if login.trim().is_empty() {
            return Err(DomainError::validation("User login is required"));
        }

        debug!("Fetching repositories for user: {}", login);
        let mut repositories = self.lister.list_repositories(login).await?;
        repositories.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(repositories)
    }

    /// Latest-wins variant, same contract as the search use case: `Ok(None)`
    /// means a newer fetch superseded this one while it was in flight.
    pub async fn execute_latest(
        &self,
        user: &User,
    ) -> Result<Option<Vec<Repository>>, DomainError> {
        let ticket = self.sequence.issue();
        let result = self.execute(user).await;
        if !self.sequence.is_current(&ticket) {
            debug!("Discarding superseded repository fetch for: {}", user.login);
            return Ok(None);
        }
        result.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{TimeZone, Utc};

    use super::*;

    fn user(login: &str) -> User {
        User {
            id: 1,
            login: login.to_string(),
            avatar_url: format!("https://avatars.example.com/{}", login),
            html_url: format!("https://github.com/{}", login),
            name: None,
            bio: None,
            public_repos: 0,
            followers: 0,
            following: 0,
        }
    }

    fn repo(id: u64, name: &str, year: i32, month: u32) -> Repository {
        Repository {
            id,
            name: name.to_string(),
            description: None,
            html_url: format!("https://github.com/octocat/{}", name),
            language: None,
            stargazers_count: 0,
            forks_count: 0,
            updated_at: Utc.with_ymd_and_hms(year, month, 1, 12, 0, 0).unwrap(),
            is_private: false,
            is_fork: false,
            topics: Vec::new(),
        }
    }

    struct StubLister {
        repositories: Vec<Repository>,
        calls: AtomicUsize,
    }

    impl StubLister {
        fn returning(repositories: Vec<Repository>) -> Self {
            StubLister {
                repositories,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RepositoryLister for StubLister {
        async fn list_repositories(&self, _username: &str) -> Result<Vec<Repository>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.repositories.clone())
        }
    }

    #[tokio::test]
    async fn repositories_come_back_newest_first() {
        let oldest = repo(1, "first", 2021, 1);
        let newest = repo(2, "second", 2023, 6);
        let middle = repo(3, "third", 2022, 1);
        let lister = StubLister::returning(vec![oldest.clone(), newest.clone(), middle.clone()]);
        let usecase = GetUserRepositoriesUseCase::new(Arc::new(lister));

        let repositories = usecase.execute(&user("octocat")).await.unwrap();
        assert_eq!(repositories, vec![newest, middle, oldest]);
    }

    #[tokio::test]
    async fn equal_timestamps_keep_adapter_order() {
        let tied_a = repo(1, "tied-a", 2022, 3);
        let tied_b = repo(2, "tied-b", 2022, 3);
        let newer = repo(3, "newer", 2023, 1);
        let lister = StubLister::returning(vec![tied_a.clone(), tied_b.clone(), newer.clone()]);
        let usecase = GetUserRepositoriesUseCase::new(Arc::new(lister));

        let repositories = usecase.execute(&user("octocat")).await.unwrap();
        assert_eq!(repositories, vec![newer, tied_a, tied_b]);
    }

    #[tokio::test]
    async fn blank_login_never_reaches_the_adapter() {
        let lister = Arc::new(StubLister::returning(Vec::new()));
        let usecase = GetUserRepositoriesUseCase::new(lister.clone());

        let err = usecase.execute(&user("  ")).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "User login is required");
        assert_eq!(lister.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn user_with_no_repositories_is_an_empty_success() {
        let usecase = GetUserRepositoriesUseCase::new(Arc::new(StubLister::returning(Vec::new())));

        let repositories = usecase.execute(&user("octocat")).await.unwrap();
        assert!(repositories.is_empty());
    }

    #[tokio::test]
    async fn uncontended_latest_fetch_returns_its_results() {
        let newest = repo(1, "only", 2023, 1);
        let usecase =
            GetUserRepositoriesUseCase::new(Arc::new(StubLister::returning(vec![newest.clone()])));

        let repositories = usecase.execute_latest(&user("octocat")).await.unwrap();
        assert_eq!(repositories, Some(vec![newest]));
    }
}
