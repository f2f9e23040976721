use std::sync::Arc;

use crate::subscriber::Subscriber;

pub type SubscriberId = String;

/// Represents a topic in the broker system.
///
/// Holds the topic name and an ordered list of subscribers. The list order is
/// subscription order and delivery happens in that order. Duplicate
/// registrations of the same subscriber are allowed and each duplicate
/// receives its own delivery per publish; `unsubscribe` removes every entry
/// with a matching id.
///
/// The topic does not own subscriber lifetime. Entries are shared `Arc`
/// handles; whoever constructed the `Subscriber` keeps it alive.
#[derive(Debug, Default)]
pub struct Topic {
    pub name: String,
    pub subscribers: Vec<Arc<Subscriber>>,
}

impl Topic {
    /// Creates a new topic with the given name and no subscribers.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subscribers: Vec::new(),
        }
    }

    /// Appends a subscriber to the topic.
    /// Subscribing the same subscriber twice yields two entries.
    pub fn subscribe(&mut self, subscriber: Arc<Subscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Removes every subscription whose id equals `id`.
    /// If no entry matches, it has no effect.
    pub fn unsubscribe(&mut self, id: &str) {
        self.subscribers.retain(|s| s.id() != id);
    }
}
