use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{Repository, User};

/// Envelope returned by `GET /search/users`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchUsersResponse {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<UserPayload>,
}

/// Raw user item as GitHub serializes it. Search results omit the profile
/// fields and counters, so everything past the identity block is optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
}

/// Raw repository item from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryPayload {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "private")]
    pub is_private: bool,
    #[serde(rename = "fork")]
    pub is_fork: bool,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        User {
            id: payload.id,
            login: payload.login,
            avatar_url: payload.avatar_url,
            html_url: payload.html_url,
            name: payload.name,
            bio: payload.bio,
            public_repos: payload.public_repos,
            followers: payload.followers,
            following: payload.following,
        }
    }
}

impl From<RepositoryPayload> for Repository {
    fn from(payload: RepositoryPayload) -> Self {
        Repository {
            id: payload.id,
            name: payload.name,
            description: payload.description,
            html_url: payload.html_url,
            language: payload.language,
            stargazers_count: payload.stargazers_count,
            forks_count: payload.forks_count,
            updated_at: payload.updated_at,
            is_private: payload.is_private,
            is_fork: payload.is_fork,
            topics: payload.topics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn repository_payload_maps_into_entity() {
        let payload: RepositoryPayload = serde_json::from_value(json!({
            "id": 1296269,
            "name": "hello-world",
            "full_name": "octocat/hello-world",
            "description": "My first repository",
            "html_url": "https://github.com/octocat/hello-world",
            "language": "Rust",
            "stargazers_count": 1537,
            "forks_count": 80,
            "updated_at": "2023-06-01T12:00:00Z",
            "private": false,
            "fork": true,
            "topics": ["rust", "demo"]
        }))
        .unwrap();

        let repo = Repository::from(payload);
        assert_eq!(repo.id, 1296269);
        assert_eq!(repo.name, "hello-world");
        assert_eq!(repo.stargazers_count, 1537);
        assert_eq!(
            repo.updated_at,
            Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap()
        );
        assert!(repo.is_fork);
        assert!(!repo.is_private);
        assert_eq!(repo.topics, ["rust", "demo"]);
    }

    #[test]
    fn repository_payload_tolerates_nulls_and_missing_topics() {
        let payload: RepositoryPayload = serde_json::from_value(json!({
            "id": 2,
            "name": "scratch",
            "description": null,
            "html_url": "https://github.com/octocat/scratch",
            "language": null,
            "stargazers_count": 0,
            "forks_count": 0,
            "updated_at": "2021-01-01T00:00:00Z",
            "private": true,
            "fork": false
        }))
        .unwrap();

        let repo = Repository::from(payload);
        assert_eq!(repo.description, None);
        assert_eq!(repo.language, None);
        assert!(repo.topics.is_empty());
        assert!(repo.is_private);
    }

    #[test]
    fn search_item_counters_default_to_zero() {
        // Search results carry only the identity block.
        let payload: UserPayload = serde_json::from_value(json!({
            "id": 583231,
            "login": "octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "score": 1.0
        }))
        .unwrap();

        let user = User::from(payload);
        assert_eq!(user.login, "octocat");
        assert_eq!(user.name, None);
        assert_eq!(user.public_repos, 0);
        assert_eq!(user.followers, 0);
        assert_eq!(user.following, 0);
    }

    #[test]
    fn full_profile_fields_carry_over() {
        let payload: UserPayload = serde_json::from_value(json!({
            "id": 583231,
            "login": "octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "html_url": "https://github.com/octocat",
            "name": "The Octocat",
            "bio": "Mascot",
            "public_repos": 8,
            "followers": 3938,
            "following": 9
        }))
        .unwrap();

        let user = User::from(payload);
        assert_eq!(user.name.as_deref(), Some("The Octocat"));
        assert_eq!(user.bio.as_deref(), Some("Mascot"));
        assert_eq!(user.public_repos, 8);
        assert_eq!(user.followers, 3938);
    }
}
