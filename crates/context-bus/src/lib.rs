//! Publish/subscribe channel connecting Latchkey extension contexts.
//!
//! The popup, the background process, and pages running in spawned tabs all
//! hold clones of one [`ContextBus`]. Any context may publish; every live
//! subscriber receives every published message.
//!
//! Subscriptions are keyed by an opaque [`SubscriptionId`] minted by the bus
//! itself, so two concurrently live subscribers can never collide on a
//! shared key. A subscriber consumes messages by draining the receiver half
//! of its [`Subscription`] from its own task; that drain point is where
//! cross-context messages re-enter the subscriber's execution context, and
//! subscriber-owned state must only be touched there.

mod bus;

pub use bus::{ContextBus, Subscription, SubscriptionId};
