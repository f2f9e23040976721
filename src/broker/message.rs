use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Represents a published message in the Pub/Sub system.
///
/// A message consists of a topic identifier, the payload content,
/// and a timestamp indicating when it was published.
///
/// The payload is opaque to the broker: it is carried and delivered verbatim,
/// never parsed. The timestamp is assigned once at construction and never
/// mutated afterwards.
///
/// # Fields
///
/// - `topic` - The name of the topic this message belongs to.
/// - `payload` - The actual message content, usually a JSON-encoded string.
/// - `timestamp` - Unix timestamp in milliseconds at which the message was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub topic: String,
    pub payload: String,
    pub timestamp: i64,
}

impl Message {
    /// Creates a new message addressed to `topic`, stamping it with the
    /// current wall-clock time.
    pub fn new(topic: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}
