use std::io::{self, BufRead};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use github_user_search::utils::validation::validate_github_username;
use github_user_search::{
    DomainError, GetUserRepositoriesUseCase, GitHubClient, MonitorNetworkStatusUseCase,
    NetworkStatus, NetworkStatusTracker, Repository, SearchUsersUseCase, User,
};

#[derive(Parser, Debug)]
#[command(
    name = "github-user-search",
    version,
    about = "Search GitHub users and browse their repositories from the terminal"
)]
struct Cli {
    /// Search query matched against GitHub user logins and profiles
    query: Option<String>,

    /// Skip the search step and fetch repositories for this login directly
    #[arg(long)]
    user: Option<String>,

    /// Probe connectivity and print the verdict instead of searching
    #[arg(long)]
    offline_check: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    info!("Starting GitHub user search");

    // Composition root: one tracker, one client, use cases share both
    let tracker = Arc::new(NetworkStatusTracker::new(true));
    let client = Arc::new(GitHubClient::new(tracker.clone()));
    let search_users = SearchUsersUseCase::new(client.clone());
    let user_repositories = GetUserRepositoriesUseCase::new(client);
    let monitor = MonitorNetworkStatusUseCase::new(tracker);

    let outcome = if cli.offline_check {
        run_offline_check(&monitor).await
    } else if let Some(login) = cli.user.as_deref() {
        run_direct_fetch(&user_repositories, login).await
    } else if let Some(query) = cli.query.as_deref() {
        run_search_flow(&search_users, &user_repositories, query).await
    } else {
        eprintln!("Usage: github-user-search <QUERY> | --user <LOGIN> | --offline-check");
        return ExitCode::FAILURE;
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Request failed: {}", err);
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run_offline_check(monitor: &MonitorNetworkStatusUseCase) -> Result<(), DomainError> {
    println!("{}", NetworkStatus::checking().display_message());
    let verdict = monitor.check_connectivity().await;
    println!("{}", verdict.display_message());
    Ok(())
}

async fn run_direct_fetch(
    user_repositories: &GetUserRepositoriesUseCase,
    login: &str,
) -> Result<(), DomainError> {
    validate_github_username(login)?;
    let repositories = user_repositories.execute_for_login(login).await?;
    print_repositories(login, &repositories);
    Ok(())
}

async fn run_search_flow(
    search_users: &SearchUsersUseCase,
    user_repositories: &GetUserRepositoriesUseCase,
    query: &str,
) -> Result<(), DomainError> {
    let users = search_users.execute(query).await?;
    if users.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    println!("Found {} users:", users.len());
    for (index, user) in users.iter().enumerate() {
        println!(
            "  {}. {} ({})",
            index + 1,
            user.display_name(),
            user.profile_stats()
        );
    }

    let Some(user) = pick_user(&users) else {
        return Ok(());
    };

    let repositories = user_repositories.execute(user).await?;
    print_repositories(&user.login, &repositories);
    Ok(())
}

/// Reads a 1-based selection from stdin. Empty input, end of input or an
/// out-of-range answer all mean "no selection".
fn pick_user(users: &[User]) -> Option<&User> {
    println!();
    println!("Select a user (1-{}), or press Enter to quit:", users.len());

    let mut line = String::new();
    if let Err(err) = io::stdin().lock().read_line(&mut line) {
        error!("Failed to read selection: {}", err);
        return None;
    }

    let answer = line.trim();
    if answer.is_empty() {
        return None;
    }

    match answer.parse::<usize>() {
        Ok(index) if (1..=users.len()).contains(&index) => Some(&users[index - 1]),
        _ => {
            println!("Not a valid selection: {}", answer);
            None
        }
    }
}

fn print_repositories(login: &str, repositories: &[Repository]) {
    println!();
    println!("Repositories for {}:", login);
    if repositories.is_empty() {
        println!("  (none)");
        return;
    }

    for repository in repositories {
        print_repository(repository);
    }
}

fn print_repository(repository: &Repository) {
    println!(
        "  {}  {} stars  {} forks  {}  updated {}",
        repository.name,
        repository.formatted_star_count(),
        repository.formatted_fork_count(),
        repository.language.as_deref().unwrap_or("-"),
        repository.formatted_updated_date(),
    );
    if let Some(description) = &repository.description {
        println!("      {}", description);
    }
    if !repository.display_topics().is_empty() {
        let mut topics = repository.display_topics().join(", ");
        if repository.has_more_topics() {
            topics.push_str(&format!(" +{}", repository.additional_topics_count()));
        }
        println!("      topics: {}", topics);
    }
}
