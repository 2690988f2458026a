pub mod monitor;

pub use monitor::{NetworkStatusSource, NetworkStatusTracker, StatusCallback, Subscription};
