//! The process-wide broadcaster.

use page_protocol_types::PageMessage;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tracing::debug;
use uuid::Uuid;

/// Opaque handle identifying one live subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A live registration on the bus.
///
/// Dropping the receiver without unsubscribing is tolerated: the bus prunes
/// the dead sender on the next publish.
pub struct Subscription {
    pub id: SubscriptionId,
    pub receiver: mpsc::UnboundedReceiver<PageMessage>,
}

/// Process-wide publish/subscribe channel.
///
/// Cheap to clone; all clones share one subscriber registry.
#[derive(Clone, Default)]
pub struct ContextBus {
    subscribers: Arc<Mutex<HashMap<SubscriptionId, mpsc::UnboundedSender<PageMessage>>>>,
}

impl ContextBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber.
    ///
    /// Every call mints a fresh [`SubscriptionId`]; callers cannot supply
    /// their own key, so duplicate registration under one id is impossible.
    pub fn subscribe(&self) -> Subscription {
        let id = SubscriptionId(Uuid::new_v4());
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap().insert(id, tx);
        debug!(subscription_id = %id, "bus subscriber registered");
        Subscription { id, receiver: rx }
    }

    /// Remove a subscriber.
    ///
    /// Idempotent: unsubscribing an id that was never registered, or was
    /// already removed, is a no-op. Messages already queued on the
    /// subscriber's channel stay readable until the receiver is dropped.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        let removed = self.subscribers.lock().unwrap().remove(&id).is_some();
        if removed {
            debug!(subscription_id = %id, "bus subscriber removed");
        }
    }

    /// Deliver a message to every live subscriber.
    ///
    /// Subscribers whose receiver has been dropped are pruned as a side
    /// effect. Send failures are not surfaced to the publisher.
    pub fn publish(&self, message: &PageMessage) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|id, tx| {
            let alive = tx.send(message.clone()).is_ok();
            if !alive {
                debug!(subscription_id = %id, "pruned dead bus subscriber");
            }
            alive
        });
    }

    /// Number of live subscribers, for diagnostics.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(command: &str) -> PageMessage {
        PageMessage {
            command: command.to_string(),
            data: None,
            sender_tab: None,
        }
    }

    #[tokio::test]
    async fn delivers_to_all_subscribers() {
        let bus = ContextBus::new();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        bus.publish(&message("syncCompleted"));

        assert_eq!(a.receiver.recv().await.unwrap().command, "syncCompleted");
        assert_eq!(b.receiver.recv().await.unwrap().command, "syncCompleted");
    }

    #[tokio::test]
    async fn each_subscription_gets_a_distinct_id() {
        let bus = ContextBus::new();
        let a = bus.subscribe();
        let b = bus.subscribe();

        assert_ne!(a.id, b.id);
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[tokio::test]
    async fn unsubscribed_receiver_sees_channel_close() {
        let bus = ContextBus::new();
        let mut sub = bus.subscribe();

        bus.unsubscribe(sub.id);
        bus.publish(&message("syncCompleted"));

        assert!(sub.receiver.recv().await.is_none());
    }

    #[tokio::test]
    async fn unsubscribe_is_idempotent() {
        let bus = ContextBus::new();
        let sub = bus.subscribe();

        bus.unsubscribe(sub.id);
        bus.unsubscribe(sub.id);

        // An id that was never registered is also a no-op.
        let other_bus = ContextBus::new();
        let foreign = other_bus.subscribe();
        bus.unsubscribe(foreign.id);

        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn publish_prunes_dropped_receivers() {
        let bus = ContextBus::new();
        let sub = bus.subscribe();
        drop(sub.receiver);

        bus.publish(&message("syncCompleted"));

        assert_eq!(bus.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn clones_share_one_registry() {
        let bus = ContextBus::new();
        let publisher = bus.clone();
        let mut sub = bus.subscribe();

        publisher.publish(&message("syncCompleted"));

        assert!(sub.receiver.recv().await.is_some());
    }
}
