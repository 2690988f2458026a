use regex::Regex;

use crate::utils::errors::DomainError;

/// GitHub login rules: 1-39 characters, alphanumeric and hyphens, cannot
/// start or end with a hyphen.
pub fn validate_github_username(username: &str) -> Result<(), DomainError> {
    if username.is_empty() || username.len() > 39 {
        return Err(DomainError::validation(
            "GitHub username must be between 1 and 39 characters",
        ));
    }

    let regex =
        Regex::new(r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,37}[a-zA-Z0-9])?$").expect("Invalid regex pattern");

    if !regex.is_match(username) {
        return Err(DomainError::validation(
            "Invalid GitHub username format. Must contain only alphanumeric characters and hyphens, cannot start or end with hyphen",
        ));
    }

    if username.contains("--") {
        return Err(DomainError::validation(
            "GitHub username cannot contain consecutive hyphens",
        ));
    }

    Ok(())
}
