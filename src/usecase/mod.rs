pub mod network_monitor;
pub mod search_users;
pub mod sequence;
pub mod user_repositories;

pub use network_monitor::MonitorNetworkStatusUseCase;
pub use search_users::{SearchUsersUseCase, UserSearcher};
pub use sequence::{RequestSequence, RequestTicket};
pub use user_repositories::{GetUserRepositoriesUseCase, RepositoryLister};
