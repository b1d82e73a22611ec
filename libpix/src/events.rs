//! Notification delivery
//!
//! The feed store hands every notice raised by a transition to a
//! `NotificationSink`. Delivery is fire-and-forget: sinks never report back.
//!
//! `EventBus` is the standard sink. It uses `tokio::sync::broadcast` for
//! multi-subscriber support; if nobody is subscribed, events are dropped.
//! Receivers can be polled synchronously with `try_recv`, which is how the
//! terminal front end drains them between frames.
//!
//! # Example
//!
//! ```
//! use libpix::events::{Event, EventBus, NotificationSink};
//! use libpix::types::Notification;
//!
//! let event_bus = EventBus::new(16);
//! let mut receiver = event_bus.subscribe();
//!
//! event_bus.notify(Notification::info("Post deleted", "The post has been removed"));
//!
//! match receiver.try_recv() {
//!     Ok(Event::Notification(notice)) => assert_eq!(notice.title, "Post deleted"),
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::Notification;

/// Event receiver type alias
pub type EventReceiver = broadcast::Receiver<Event>;

/// Consumer of user-facing notices
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

/// Events published on the bus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    Notification(Notification),
}

/// Broadcast bus for feed events
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus
    ///
    /// `capacity` is how many events each subscriber may fall behind before
    /// the oldest ones are dropped.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Emit an event to all subscribers without blocking
    pub fn emit(&self, event: Event) {
        // Err only means there are no receivers
        let _ = self.sender.send(event);
    }

    /// Number of active subscribers, for diagnostics only
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}

impl NotificationSink for EventBus {
    fn notify(&self, notification: Notification) {
        self.emit(Event::Notification(notification));
    }
}
