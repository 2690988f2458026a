pub mod domain;
pub mod github;
pub mod network;
pub mod usecase;
pub mod utils;

// Re-export what callers need to wire the pieces together
pub use domain::{ConnectionState, NetworkStatus, Repository, SearchQuery, User};
pub use github::{GitHubClient, GitHubConfig};
pub use network::{NetworkStatusSource, NetworkStatusTracker, Subscription};
pub use usecase::{GetUserRepositoriesUseCase, MonitorNetworkStatusUseCase, SearchUsersUseCase};
pub use utils::errors::DomainError;
