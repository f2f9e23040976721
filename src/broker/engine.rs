use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tracing::{debug, info};

use crate::broker::history::TopicHistory;
use crate::broker::message::Message;
use crate::broker::topic::Topic;
use crate::config::BrokerSettings;
use crate::subscriber::Subscriber;

/// History limit applied by [`Broker::recent_history`] unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Per-topic retention cap unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// All mutable broker state, guarded by a single lock.
///
/// Keeping the registry and the history store behind one mutex means every
/// operation observes a fully-applied prior state; no caller can see a
/// half-updated registry.
#[derive(Debug, Default)]
struct BrokerState {
    topics: HashMap<String, Topic>,
    history: HashMap<String, TopicHistory>,
}

/// A read-only snapshot of registry sizes at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokerStats {
    pub topic_count: usize,
    pub per_topic: HashMap<String, usize>,
}

/// Represents the broker that manages topics, subscribers and message history.
///
/// Clients subscribe to topics, publish messages, and query per-topic history
/// and aggregate statistics. The broker maintains a mapping of topics to
/// subscriber lists and delivers each published message to all subscribers of
/// its topic, in subscription order.
///
/// All state lives behind one internal mutex, so the public API takes `&self`
/// and the broker can be shared across threads as `Arc<Broker>` directly.
/// `publish` captures the subscriber list and appends history under the lock,
/// then delivers against that snapshot after releasing it: a slow subscriber
/// delays its own publish call but not publishes to unrelated topics.
#[derive(Debug)]
pub struct Broker {
    state: Mutex<BrokerState>,
    history_capacity: usize,
    default_history_limit: usize,
}

impl Default for Broker {
    fn default() -> Self {
        Self::new()
    }
}

impl Broker {
    /// Creates a broker with default history retention.
    pub fn new() -> Self {
        Self::with_history_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates a broker that retains at most `capacity` messages per topic.
    pub fn with_history_capacity(capacity: usize) -> Self {
        Self {
            state: Mutex::new(BrokerState::default()),
            history_capacity: capacity,
            default_history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Creates a broker from loaded configuration.
    pub fn from_settings(settings: &BrokerSettings) -> Self {
        Self {
            state: Mutex::new(BrokerState::default()),
            history_capacity: settings.history_capacity,
            default_history_limit: settings.default_history_limit,
        }
    }

    // Every mutation completes before the guard drops, so recovering from a
    // poisoned lock can never expose a half-applied registry.
    fn lock(&self) -> MutexGuard<'_, BrokerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Publishes `payload` to `topic`.
    ///
    /// Constructs the message (assigning its timestamp), appends it to the
    /// topic's history, then delivers it to every subscriber registered at
    /// the moment of publish, in subscription order, before returning.
    /// Subscribers added by a concurrent `subscribe` mid-delivery do not
    /// receive the in-flight message.
    ///
    /// Publishing to a topic with no subscribers still records history; it is
    /// not an error.
    pub fn publish(&self, topic: &str, payload: &str) {
        let message = Message::new(topic, payload);
        let capacity = self.history_capacity;

        let snapshot: Vec<Arc<Subscriber>> = {
            let mut state = self.lock();
            state
                .history
                .entry(topic.to_string())
                .or_insert_with(|| TopicHistory::new(capacity))
                .push(message.clone());
            state
                .topics
                .get(topic)
                .map(|t| t.subscribers.clone())
                .unwrap_or_default()
        };

        if snapshot.is_empty() {
            debug!(topic, "published, no subscribers");
            return;
        }
        for subscriber in &snapshot {
            subscriber.receive(message.clone());
        }
        debug!(topic, subscribers = snapshot.len(), "published");
    }

    /// Subscribes a subscriber to a topic.
    /// Automatically creates the topic if it doesn't exist.
    ///
    /// Idempotency is not enforced: subscribing the same subscriber twice to
    /// one topic yields two deliveries per publish.
    pub fn subscribe(&self, topic: &str, subscriber: Arc<Subscriber>) {
        let mut state = self.lock();
        info!(topic, subscriber = %subscriber.id(), "subscribed");
        state
            .topics
            .entry(topic.to_string())
            .or_insert_with(|| Topic::new(topic))
            .subscribe(subscriber);
    }

    /// Unsubscribes all registrations of `subscriber_id` from a topic.
    /// If the topic or id is unknown, it will not perform any action.
    pub fn unsubscribe(&self, topic: &str, subscriber_id: &str) {
        let mut state = self.lock();
        if let Some(t) = state.topics.get_mut(topic) {
            t.unsubscribe(subscriber_id);
            info!(topic, subscriber = subscriber_id, "unsubscribed");
        }
    }

    /// Returns the most recent `min(limit, len)` messages published to
    /// `topic`, oldest first. An unknown topic or `limit == 0` yields an
    /// empty vector.
    pub fn history(&self, topic: &str, limit: usize) -> Vec<Message> {
        let state = self.lock();
        state
            .history
            .get(topic)
            .map(|h| h.recent(limit))
            .unwrap_or_default()
    }

    /// [`Broker::history`] with the configured default limit.
    pub fn recent_history(&self, topic: &str) -> Vec<Message> {
        self.history(topic, self.default_history_limit)
    }

    /// Returns a snapshot of topic count and per-topic subscriber counts.
    pub fn stats(&self) -> BrokerStats {
        let state = self.lock();
        BrokerStats {
            topic_count: state.topics.len(),
            per_topic: state
                .topics
                .iter()
                .map(|(name, t)| (name.clone(), t.subscribers.len()))
                .collect(),
        }
    }
}
