use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use tracing::debug;

use crate::domain::NetworkStatus;

/// Listener invoked with a freshly constructed status on every transition.
pub type StatusCallback = Box<dyn Fn(NetworkStatus) + Send + Sync + 'static>;

/// Read side of the connectivity monitor: a synchronous snapshot plus
/// transition subscriptions. The GitHub adapters consult this before issuing
/// requests, so offline calls fail without touching the network.
pub trait NetworkStatusSource: Send + Sync {
    fn current_status(&self) -> NetworkStatus;
    fn subscribe(&self, callback: StatusCallback) -> Subscription;
}

struct Listener {
    id: u64,
    callback: Arc<dyn Fn(NetworkStatus) + Send + Sync>,
}

/// In-process stand-in for a platform connectivity signal. The embedding
/// application forwards its online/offline transitions into `set_online` /
/// `set_offline`; subscribers are notified of each one.
pub struct NetworkStatusTracker {
    online: AtomicBool,
    listeners: Arc<Mutex<Vec<Listener>>>,
    next_id: AtomicU64,
}

impl NetworkStatusTracker {
    pub fn new(initially_online: bool) -> Self {
        NetworkStatusTracker {
            online: AtomicBool::new(initially_online),
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: AtomicU64::new(1),
        }
    }

    /// The platform reported the network came back.
    pub fn set_online(&self) {
        self.online.store(true, Ordering::SeqCst);
        self.notify(NetworkStatus::online());
    }

    /// The platform reported the network went away.
    pub fn set_offline(&self) {
        self.online.store(false, Ordering::SeqCst);
        self.notify(NetworkStatus::offline());
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    fn notify(&self, status: NetworkStatus) {
        // Snapshot under the lock, invoke outside it: callbacks may freely
        // subscribe or unsubscribe while a notification is in progress.
        let snapshot: Vec<Arc<dyn Fn(NetworkStatus) + Send + Sync>> = {
            let listeners = self.listeners.lock().unwrap();
            listeners.iter().map(|l| Arc::clone(&l.callback)).collect()
        };

        debug!(
            "Notifying {} connectivity listeners (online: {})",
            snapshot.len(),
            status.is_online()
        );

        for callback in snapshot {
            callback(status.clone());
        }
    }
}

impl Default for NetworkStatusTracker {
    /// Starts online, matching a freshly loaded page on a connected host.
    fn default() -> Self {
        NetworkStatusTracker::new(true)
    }
}

impl NetworkStatusSource for NetworkStatusTracker {
    fn current_status(&self) -> NetworkStatus {
        if self.is_online() {
            NetworkStatus::online()
        } else {
            NetworkStatus::offline()
        }
    }

    fn subscribe(&self, callback: StatusCallback) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut listeners = self.listeners.lock().unwrap();
        listeners.push(Listener {
            id,
            callback: Arc::from(callback),
        });
        Subscription {
            id,
            listeners: Arc::downgrade(&self.listeners),
        }
    }
}

/// Handle for one registered listener. Consuming it removes exactly that
/// listener; dropping it without calling [`Subscription::unsubscribe`] leaves
/// the listener registered for the lifetime of the tracker.
pub struct Subscription {
    id: u64,
    listeners: Weak<Mutex<Vec<Listener>>>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(listeners) = self.listeners.upgrade() {
            let mut listeners = listeners.lock().unwrap();
            listeners.retain(|l| l.id != self.id);
        }
    }
}
