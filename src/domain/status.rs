use chrono::{DateTime, Utc};

/// Perceived network reachability.
///
/// `Checking` is reserved for presentation while an active probe is in
/// flight; neither the tracker nor the probe ever publishes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Online,
    Offline,
    Checking,
}

/// A connectivity snapshot. Offline snapshots remember when the network was
/// last known reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkStatus {
    state: ConnectionState,
    last_online_at: Option<DateTime<Utc>>,
}

impl NetworkStatus {
    pub fn online() -> Self {
        NetworkStatus {
            state: ConnectionState::Online,
            last_online_at: None,
        }
    }

    /// Marks the network as gone, capturing now as the last-online moment.
    pub fn offline() -> Self {
        NetworkStatus {
            state: ConnectionState::Offline,
            last_online_at: Some(Utc::now()),
        }
    }

    pub fn checking() -> Self {
        NetworkStatus {
            state: ConnectionState::Checking,
            last_online_at: None,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn last_online_at(&self) -> Option<DateTime<Utc>> {
        self.last_online_at
    }

    pub fn is_online(&self) -> bool {
        self.state == ConnectionState::Online
    }

    pub fn is_offline(&self) -> bool {
        self.state == ConnectionState::Offline
    }

    pub fn is_checking(&self) -> bool {
        self.state == ConnectionState::Checking
    }

    pub fn display_message(&self) -> &'static str {
        match self.state {
            ConnectionState::Online => "Connected",
            ConnectionState::Offline => "No internet connection",
            ConnectionState::Checking => "Checking connection...",
        }
    }
}
