use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::domain::NetworkStatus;
use crate::network::{NetworkStatusSource, StatusCallback, Subscription};

const PROBE_URL: &str = "https://api.github.com";
const PROBE_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-side of connectivity: exposes the tracked status, fans callbacks
/// out to the underlying source, and can actively probe reachability.
pub struct MonitorNetworkStatusUseCase {
    network: Arc<dyn NetworkStatusSource>,
    probe_client: Client,
    probe_url: String,
}

impl MonitorNetworkStatusUseCase {
    pub fn new(network: Arc<dyn NetworkStatusSource>) -> Self {
        Self::with_probe_url(network, PROBE_URL)
    }

    pub fn with_probe_url(
        network: Arc<dyn NetworkStatusSource>,
        probe_url: impl Into<String>,
    ) -> Self {
        let probe_client = Client::builder()
            .timeout(PROBE_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        MonitorNetworkStatusUseCase {
            network,
            probe_client,
            probe_url: probe_url.into(),
        }
    }

    pub fn current_status(&self) -> NetworkStatus {
        self.network.current_status()
    }

    pub fn subscribe(&self, callback: StatusCallback) -> Subscription {
        self.network.subscribe(callback)
    }

    /// Actively verifies reachability with a HEAD request. Any response,
    /// error status included, proves the network path works; only transport
    /// failures count as offline. While the source already reports offline
    /// the probe is skipped. The verdict goes to the caller alone, never to
    /// subscribers.
    pub async fn check_connectivity(&self) -> NetworkStatus {
        if self.current_status().is_offline() {
            return NetworkStatus::offline();
        }

        match self.probe_client.head(&self.probe_url).send().await {
            Ok(_) => NetworkStatus::online(),
            Err(err) => {
                debug!("Connectivity probe failed: {}", err);
                NetworkStatus::offline()
            }
        }
    }
}
