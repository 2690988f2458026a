pub mod query;
pub mod repository;
pub mod status;
pub mod user;

pub use query::SearchQuery;
pub use repository::Repository;
pub use status::{ConnectionState, NetworkStatus};
pub use user::User;
