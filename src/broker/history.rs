use std::collections::VecDeque;

use crate::broker::message::Message;

/// Bounded per-topic record of published messages, in publish order.
///
/// Ring-buffer semantics: once `capacity` entries are held, appending a new
/// message evicts the oldest one. Retrieval applies an on-read limit, so the
/// write path stays a plain append plus at most one eviction.
#[derive(Debug)]
pub struct TopicHistory {
    entries: VecDeque<Message>,
    capacity: usize,
}

impl TopicHistory {
    /// Creates an empty history that retains at most `capacity` messages.
    /// A capacity of zero retains nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Appends a message, evicting the oldest entry once the cap is reached.
    pub fn push(&mut self, message: Message) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(message);
    }

    /// Returns the most recent `min(limit, len)` messages, oldest first.
    /// `limit == 0` yields an empty vector.
    pub fn recent(&self, limit: usize) -> Vec<Message> {
        if limit == 0 {
            return Vec::new();
        }
        let skip = self.entries.len().saturating_sub(limit);
        self.entries.iter().skip(skip).cloned().collect()
    }

    /// Number of retained messages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
