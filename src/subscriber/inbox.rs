use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use tracing::debug;
use uuid::Uuid;

use crate::broker::message::Message;

/// An addressable inbox for delivered messages.
///
/// Each subscriber has a unique id, used by the broker for equality-based
/// unsubscribe, and a private FIFO inbox of received messages. The inbox is
/// mutated only through `receive`; this core provides no drain operation, so
/// consuming buffered messages is left to whoever owns the subscriber.
///
/// The inbox has its own lock, independent of the broker's, so accepting a
/// delivery never contends with dispatch on unrelated topics.
#[derive(Debug)]
pub struct Subscriber {
    id: String,
    inbox: Mutex<VecDeque<Message>>,
}

impl Subscriber {
    /// Creates a subscriber with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            inbox: Mutex::new(VecDeque::new()),
        }
    }

    /// Creates a subscriber with a generated unique id.
    pub fn anonymous() -> Self {
        Self::new(format!("subscriber-{}", Uuid::new_v4()))
    }

    /// Returns the immutable subscriber id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Appends a delivered message to the inbox.
    /// Delivery is always accepted; there is no full or closed state.
    pub fn receive(&self, message: Message) {
        debug!(subscriber = %self.id, topic = %message.topic, "received message");
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(message);
    }

    /// Returns the current number of buffered, undrained messages.
    pub fn queue_size(&self) -> usize {
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns a snapshot of the buffered messages, oldest first.
    pub fn messages(&self) -> Vec<Message> {
        self.inbox
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }
}
