use chrono::{DateTime, Utc};

/// How many topics are shown before the rest collapse into a "+N" marker.
const DISPLAY_TOPIC_LIMIT: usize = 3;

/// A repository owned by a searched user. Display derivations (formatted
/// counts, trimmed topic list) are computed on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u32,
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
    pub is_private: bool,
    pub is_fork: bool,
    pub topics: Vec<String>,
}

impl Repository {
    pub fn formatted_star_count(&self) -> String {
        format_count(self.stargazers_count)
    }

    pub fn formatted_fork_count(&self) -> String {
        format_count(self.forks_count)
    }

    /// Last-updated date rendered like `"Jun 1, 2023"`.
    pub fn formatted_updated_date(&self) -> String {
        self.updated_at.format("%b %-d, %Y").to_string()
    }

    /// At most the first three topics, in payload order.
    pub fn display_topics(&self) -> &[String] {
        let limit = self.topics.len().min(DISPLAY_TOPIC_LIMIT);
        &self.topics[..limit]
    }

    pub fn has_more_topics(&self) -> bool {
        self.topics.len() > DISPLAY_TOPIC_LIMIT
    }

    /// Count of topics hidden behind the display limit.
    pub fn additional_topics_count(&self) -> usize {
        self.topics.len().saturating_sub(DISPLAY_TOPIC_LIMIT)
    }
}

/// Counts of 1000 and above collapse to one decimal: 1537 becomes "1.5k".
fn format_count(count: u32) -> String {
    if count >= 1000 {
        format!("{:.1}k", count as f64 / 1000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn repo(topics: &[&str]) -> Repository {
        Repository {
            id: 1296269,
            name: "hello-world".to_string(),
            description: Some("My first repository".to_string()),
            html_url: "https://github.com/octocat/hello-world".to_string(),
            language: Some("Rust".to_string()),
            stargazers_count: 1537,
            forks_count: 80,
            updated_at: Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap(),
            is_private: false,
            is_fork: false,
            topics: topics.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn counts_below_one_thousand_stay_plain() {
        assert_eq!(repo(&[]).formatted_fork_count(), "80");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn counts_from_one_thousand_collapse_to_k() {
        assert_eq!(repo(&[]).formatted_star_count(), "1.5k");
        assert_eq!(format_count(1000), "1.0k");
        assert_eq!(format_count(12345), "12.3k");
    }

    #[test]
    fn updated_date_renders_short_month() {
        assert_eq!(repo(&[]).formatted_updated_date(), "Jun 1, 2023");
    }

    #[test]
    fn few_topics_show_unchanged() {
        let r = repo(&["cli", "rust"]);
        assert_eq!(r.display_topics(), ["cli", "rust"]);
        assert!(!r.has_more_topics());
        assert_eq!(r.additional_topics_count(), 0);
    }

    #[test]
    fn topic_overflow_is_trimmed_with_count() {
        let r = repo(&["cli", "rust", "http", "search", "github"]);
        assert_eq!(r.display_topics(), ["cli", "rust", "http"]);
        assert!(r.has_more_topics());
        assert_eq!(r.additional_topics_count(), 2);
    }
}
