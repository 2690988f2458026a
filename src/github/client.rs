use reqwest::{
    header::{HeaderMap, HeaderValue, USER_AGENT},
    Client, Response, StatusCode,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use async_trait::async_trait;

use crate::domain::{Repository, SearchQuery, User};
use crate::github::types::{RepositoryPayload, SearchUsersResponse};
use crate::network::NetworkStatusSource;
use crate::usecase::{RepositoryLister, UserSearcher};
use crate::utils::errors::DomainError;

const GITHUB_API_BASE: &str = "https://api.github.com";
const SEARCH_PAGE_SIZE: u8 = 5;
const REPOS_PAGE_SIZE: u8 = 100;

const OFFLINE_MESSAGE: &str = "No internet connection. Please check your network and try again.";
const SEARCH_USER_MESSAGE: &str = "Failed to search users. Please try again.";
const REPOS_USER_MESSAGE: &str = "Failed to fetch repositories. Please try again.";

/// Connection settings for [`GitHubClient`].
#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_base: String,
    pub token: Option<String>,
    pub timeout: Duration,
}

impl GitHubConfig {
    /// Reads `GITHUB_API_URL` and `GITHUB_TOKEN` from the environment.
    pub fn from_env() -> Self {
        GitHubConfig {
            api_base: std::env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| GITHUB_API_BASE.to_string()),
            token: std::env::var("GITHUB_TOKEN").ok(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            api_base: GITHUB_API_BASE.to_string(),
            token: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Adapter for the two unauthenticated GitHub REST endpoints this crate
/// consumes. Checks the injected connectivity source before every request so
/// offline calls fail fast instead of timing out.
pub struct GitHubClient {
    client: Client,
    api_base: String,
    network: Arc<dyn NetworkStatusSource>,
}

impl GitHubClient {
    pub fn new(network: Arc<dyn NetworkStatusSource>) -> Self {
        Self::with_config(GitHubConfig::from_env(), network)
    }

    pub fn with_config(config: GitHubConfig, network: Arc<dyn NetworkStatusSource>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static("github-user-search/0.1"),
        );
        headers.insert(
            "Accept",
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );

        match config.token.as_deref() {
            Some(token) => match HeaderValue::from_str(&format!("token {}", token)) {
                Ok(value) => {
                    headers.insert("Authorization", value);
                    info!("GitHub token configured for enhanced rate limits");
                }
                Err(_) => warn!("Ignoring GITHUB_TOKEN: not a valid header value"),
            },
            None => {
                warn!("No GitHub token configured - using anonymous access with lower rate limits")
            }
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .expect("Failed to create HTTP client");

        GitHubClient {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            network,
        }
    }

    fn require_online(&self) -> Result<(), DomainError> {
        if self.network.current_status().is_offline() {
            return Err(DomainError::network(OFFLINE_MESSAGE));
        }
        Ok(())
    }
}

#[async_trait]
impl UserSearcher for GitHubClient {
    async fn search_users(&self, query: &SearchQuery) -> Result<Vec<User>, DomainError> {
        self.require_online()?;

        let url = format!(
            "{}/search/users?per_page={}",
            self.api_base, SEARCH_PAGE_SIZE
        );
        debug!("Searching GitHub users: {} (q: {})", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query.as_str())])
            .send()
            .await
            .map_err(|err| classify_transport_error(err, SEARCH_USER_MESSAGE))?;
        let response = check_status(response, SEARCH_USER_MESSAGE).await?;

        let body: SearchUsersResponse = response
            .json()
            .await
            .map_err(|err| classify_transport_error(err, SEARCH_USER_MESSAGE))?;

        debug!(
            "Search matched {} users (incomplete: {}), returning {}",
            body.total_count,
            body.incomplete_results,
            body.items.len()
        );
        Ok(body.items.into_iter().map(User::from).collect())
    }
}

#[async_trait]
impl RepositoryLister for GitHubClient {
    async fn list_repositories(&self, username: &str) -> Result<Vec<Repository>, DomainError> {
        self.require_online()?;

        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::validation_with_user_message(
                "Username cannot be empty",
                "Please provide a valid username.",
            ));
        }

        let url = format!(
            "{}/users/{}/repos?sort=updated&per_page={}",
            self.api_base,
            urlencoding::encode(username),
            REPOS_PAGE_SIZE
        );
        debug!("Fetching GitHub repos: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| classify_transport_error(err, REPOS_USER_MESSAGE))?;
        let response = check_status(response, REPOS_USER_MESSAGE).await?;

        let payloads: Vec<RepositoryPayload> = response
            .json()
            .await
            .map_err(|err| classify_transport_error(err, REPOS_USER_MESSAGE))?;

        info!("Fetched {} repos for user: {}", payloads.len(), username);
        Ok(payloads.into_iter().map(Repository::from).collect())
    }
}

/// Passes successful responses through; anything else becomes an API error
/// carrying the server's `message` field when the body has one, or a
/// status-line fallback when it does not.
async fn check_status(response: Response, user_message: &str) -> Result<Response, DomainError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = error_body_message(response)
        .await
        .unwrap_or_else(|| http_fallback_message(status));
    Err(DomainError::api(message, Some(status.as_u16()), user_message))
}

async fn error_body_message(response: Response) -> Option<String> {
    let value: serde_json::Value = response.json().await.ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

fn http_fallback_message(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("HTTP {}: {}", status.as_u16(), reason),
        None => format!("HTTP {}", status.as_u16()),
    }
}

/// Transport-level failures (connect, timeout, request build) are network
/// errors; everything else, body decoding included, surfaces as an API error
/// without a status code.
fn classify_transport_error(err: reqwest::Error, user_message: &str) -> DomainError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        DomainError::network_caused_by(format!("Network error: {}", err), err)
    } else {
        DomainError::api_caused_by(
            format!("GitHub request failed: {}", err),
            None,
            user_message,
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkStatusTracker;

    #[test]
    fn config_defaults_to_the_public_api() {
        let config = GitHubConfig::default();
        assert_eq!(config.api_base, "https://api.github.com");
        assert_eq!(config.token, None);
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn trailing_slash_is_stripped_from_the_base_url() {
        let tracker = Arc::new(NetworkStatusTracker::new(true));
        let client = GitHubClient::with_config(
            GitHubConfig {
                api_base: "https://api.github.test/".to_string(),
                token: None,
                timeout: Duration::from_secs(5),
            },
            tracker,
        );
        assert_eq!(client.api_base, "https://api.github.test");
    }

    #[test]
    fn fallback_message_uses_the_canonical_reason() {
        assert_eq!(
            http_fallback_message(StatusCode::NOT_FOUND),
            "HTTP 404: Not Found"
        );
    }
}
