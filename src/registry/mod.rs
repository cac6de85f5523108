//! Registry of active WebSocket listeners and message fan-out.
//!
//! Each listener is represented by the sending half of an unbounded channel;
//! the socket task in `api::ws` owns the receiving half and forwards queued
//! payloads to the client. Broadcast serializes the message once and sends
//! it to every registered channel. A send only fails when the receiving
//! task is gone, so failed channels are dropped from the registry after the
//! send pass completes; the remaining listeners are unaffected.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::models::UpdateMessage;

/// Opaque handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

struct Listener {
    id: ListenerId,
    tx: mpsc::UnboundedSender<String>,
}

/// Cloneable handle to the set of active listeners.
#[derive(Clone)]
pub struct ConnectionRegistry {
    listeners: Arc<Mutex<Vec<Listener>>>,
    next_id: Arc<AtomicU64>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Add a listener channel to the active set.
    ///
    /// The channel becomes eligible for broadcasts immediately. Callers hold
    /// the returned id and pass it back to [`unregister`] on disconnect.
    ///
    /// [`unregister`]: ConnectionRegistry::unregister
    pub fn register(&self, tx: mpsc::UnboundedSender<String>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut listeners = self.listeners.lock().expect("registry lock poisoned");
        listeners.push(Listener { id, tx });
        tracing::debug!(listener = id.0, total = listeners.len(), "listener registered");
        id
    }

    /// Remove a listener from the active set. Removing an id that is absent
    /// (already removed by a failed broadcast, or unregistered twice) is a
    /// no-op.
    pub fn unregister(&self, id: ListenerId) {
        let mut listeners = self.listeners.lock().expect("registry lock poisoned");
        let before = listeners.len();
        listeners.retain(|l| l.id != id);
        if listeners.len() < before {
            tracing::debug!(listener = id.0, total = listeners.len(), "listener unregistered");
        }
    }

    /// Number of currently registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.lock().expect("registry lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Send `message` to every registered listener.
    ///
    /// A failed send means the listener's socket task has exited; the
    /// channel is removed once the full pass is done, so one dead listener
    /// never blocks delivery to the rest. Failures are local to the
    /// registry and never surface to the caller.
    pub fn broadcast(&self, message: &UpdateMessage) {
        let payload = match serde_json::to_string(message) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize broadcast message");
                return;
            }
        };

        let mut listeners = self.listeners.lock().expect("registry lock poisoned");
        let mut dead = Vec::new();
        for listener in listeners.iter() {
            if listener.tx.send(payload.clone()).is_err() {
                dead.push(listener.id);
            }
        }

        if !dead.is_empty() {
            tracing::debug!(dropped = dead.len(), "removing disconnected listeners");
            listeners.retain(|l| !dead.contains(&l.id));
        }
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CostPoint;

    fn message() -> UpdateMessage {
        UpdateMessage::CloudCosts(vec![CostPoint::new("January", 1.0)])
    }

    #[tokio::test]
    async fn broadcast_reaches_every_registered_listener() {
        let registry = ConnectionRegistry::new();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        registry.register(tx1);
        registry.register(tx2);

        registry.broadcast(&message());

        let first = rx1.recv().await.unwrap();
        let second = rx2.recv().await.unwrap();
        assert_eq!(first, second);
        assert!(first.contains("\"type\":\"cloud_costs\""));
    }

    #[tokio::test]
    async fn unregistered_listener_receives_nothing() {
        let registry = ConnectionRegistry::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let id = registry.register(tx);
        registry.unregister(id);

        registry.broadcast(&message());

        assert!(rx.try_recv().is_err());
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn double_unregister_is_a_no_op() {
        let registry = ConnectionRegistry::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let id = registry.register(tx);

        registry.unregister(id);
        registry.unregister(id);

        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn dead_listener_does_not_block_the_rest() {
        let registry = ConnectionRegistry::new();
        let (tx_dead, rx_dead) = mpsc::unbounded_channel();
        let (tx_live, mut rx_live) = mpsc::unbounded_channel();
        registry.register(tx_dead);
        registry.register(tx_live);

        // Simulate a client whose socket task has exited.
        drop(rx_dead);

        registry.broadcast(&message());

        assert!(rx_live.recv().await.is_some());
        // The dead channel was pruned during the pass.
        assert_eq!(registry.len(), 1);
    }

    #[tokio::test]
    async fn every_listener_gets_its_own_copy() {
        let registry = ConnectionRegistry::new();
        let mut receivers = Vec::new();
        for _ in 0..5 {
            let (tx, rx) = mpsc::unbounded_channel();
            registry.register(tx);
            receivers.push(rx);
        }

        registry.broadcast(&message());

        for rx in &mut receivers {
            assert!(rx.recv().await.is_some());
        }
    }
}
