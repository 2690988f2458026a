/// A GitHub account as surfaced by the search endpoint. Immutable once
/// constructed; a new search produces fresh instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

impl User {
    /// Real name when the profile has one, login otherwise.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }

    /// One-line profile summary, e.g. `"12 repos • 34 followers"`.
    pub fn profile_stats(&self) -> String {
        format!("{} repos • {} followers", self.public_repos, self.followers)
    }
}
