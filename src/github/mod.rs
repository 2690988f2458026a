pub mod client;
pub mod types;

pub use client::{GitHubClient, GitHubConfig};
pub use types::{RepositoryPayload, SearchUsersResponse, UserPayload};
