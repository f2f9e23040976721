use std::sync::Arc;

use super::Broker;
use super::history::TopicHistory;
use super::topic::Topic;
use crate::broker::message::Message;
use crate::subscriber::Subscriber;

#[test]
fn test_topic_new() {
    let topic = Topic::new("test_topic");
    assert_eq!(topic.name, "test_topic");
    assert!(topic.subscribers.is_empty());
}

#[test]
fn test_topic_subscribe_keeps_registration_order() {
    let mut topic = Topic::new("test_topic");
    topic.subscribe(Arc::new(Subscriber::new("first")));
    topic.subscribe(Arc::new(Subscriber::new("second")));
    let ids: Vec<&str> = topic.subscribers.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["first", "second"]);
}

#[test]
fn test_topic_unsubscribe_removes_all_duplicates() {
    let mut topic = Topic::new("test_topic");
    let sub = Arc::new(Subscriber::new("dup"));
    topic.subscribe(sub.clone());
    topic.subscribe(Arc::new(Subscriber::new("other")));
    topic.subscribe(sub.clone());

    topic.unsubscribe("dup");
    let ids: Vec<&str> = topic.subscribers.iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["other"]);
}

#[test]
fn test_topic_unsubscribe_unknown_id_is_noop() {
    let mut topic = Topic::new("test_topic");
    topic.subscribe(Arc::new(Subscriber::new("a")));
    topic.unsubscribe("nobody");
    assert_eq!(topic.subscribers.len(), 1);
}

#[test]
fn test_history_push_and_recent() {
    let mut history = TopicHistory::new(100);
    for i in 1..=5 {
        history.push(Message::new("t", format!("m{i}")));
    }
    let recent = history.recent(3);
    let payloads: Vec<&str> = recent.iter().map(|m| m.payload.as_str()).collect();
    assert_eq!(payloads, vec!["m3", "m4", "m5"]);
}

#[test]
fn test_history_evicts_oldest_at_capacity() {
    let mut history = TopicHistory::new(3);
    for i in 1..=5 {
        history.push(Message::new("t", format!("m{i}")));
    }
    assert_eq!(history.len(), 3);
    let all = history.recent(10);
    let payloads: Vec<&str> = all.iter().map(|m| m.payload.as_str()).collect();
    assert_eq!(payloads, vec!["m3", "m4", "m5"]);
}

#[test]
fn test_history_zero_capacity_retains_nothing() {
    let mut history = TopicHistory::new(0);
    history.push(Message::new("t", "m1"));
    assert!(history.is_empty());
}

#[test]
fn test_broker_publish_fans_out_to_all_subscribers() {
    let broker = Broker::new();
    let alice = Arc::new(Subscriber::new("alice"));
    let bob = Arc::new(Subscriber::new("bob"));
    broker.subscribe("sports", alice.clone());
    broker.subscribe("sports", bob.clone());

    broker.publish("sports", "kickoff");

    assert_eq!(alice.queue_size(), 1);
    assert_eq!(bob.queue_size(), 1);
    assert_eq!(alice.messages()[0].payload, "kickoff");
    assert_eq!(bob.messages()[0].payload, "kickoff");
}

#[test]
fn test_broker_publish_preserves_per_topic_order() {
    let broker = Broker::new();
    let sub = Arc::new(Subscriber::new("reader"));
    broker.subscribe("feed", sub.clone());

    broker.publish("feed", "one");
    broker.publish("feed", "two");
    broker.publish("feed", "three");

    let payloads: Vec<String> = sub.messages().into_iter().map(|m| m.payload).collect();
    assert_eq!(payloads, vec!["one", "two", "three"]);
}

#[test]
fn test_broker_no_cross_topic_leakage() {
    let broker = Broker::new();
    let sub = Arc::new(Subscriber::new("only_a"));
    broker.subscribe("topic_a", sub.clone());

    broker.publish("topic_b", "for b");

    assert_eq!(sub.queue_size(), 0);
}

#[test]
fn test_broker_duplicate_subscription_doubles_delivery() {
    let broker = Broker::new();
    let sub = Arc::new(Subscriber::new("eager"));
    broker.subscribe("news", sub.clone());
    broker.subscribe("news", sub.clone());

    broker.publish("news", "headline");

    assert_eq!(sub.queue_size(), 2);
}

#[test]
fn test_broker_unsubscribe_removes_all_duplicates() {
    let broker = Broker::new();
    let sub = Arc::new(Subscriber::new("eager"));
    broker.subscribe("news", sub.clone());
    broker.subscribe("news", sub.clone());

    broker.unsubscribe("news", "eager");
    broker.publish("news", "headline");

    assert_eq!(sub.queue_size(), 0);
}

#[test]
fn test_broker_unsubscribe_unknown_topic_is_noop() {
    let broker = Broker::new();
    broker.unsubscribe("never_seen", "anyone");
    assert_eq!(broker.stats().topic_count, 0);
}

#[test]
fn test_broker_publish_without_subscribers_records_history() {
    let broker = Broker::new();
    broker.publish("weather", "sunny");

    let history = broker.history("weather", 10);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].payload, "sunny");
}

#[test]
fn test_broker_history_limit_and_order() {
    let broker = Broker::new();
    for i in 1..=5 {
        broker.publish("tech", &format!("m{i}"));
    }

    let recent = broker.history("tech", 3);
    let payloads: Vec<&str> = recent.iter().map(|m| m.payload.as_str()).collect();
    assert_eq!(payloads, vec!["m3", "m4", "m5"]);

    assert!(broker.history("tech", 0).is_empty());
    assert!(broker.history("unknown", 10).is_empty());
    assert_eq!(broker.history("tech", 50).len(), 5);
}

#[test]
fn test_broker_recent_history_uses_default_limit() {
    let broker = Broker::new();
    for i in 0..15 {
        broker.publish("tech", &format!("m{i}"));
    }
    assert_eq!(broker.recent_history("tech").len(), 10);
}

#[test]
fn test_broker_history_capacity_evicts_oldest() {
    let broker = Broker::with_history_capacity(3);
    for i in 1..=5 {
        broker.publish("logs", &format!("m{i}"));
    }

    let all = broker.history("logs", 10);
    let payloads: Vec<&str> = all.iter().map(|m| m.payload.as_str()).collect();
    assert_eq!(payloads, vec!["m3", "m4", "m5"]);
}

#[test]
fn test_broker_from_settings() {
    let settings = crate::config::BrokerSettings {
        history_capacity: 2,
        default_history_limit: 1,
    };
    let broker = Broker::from_settings(&settings);
    for i in 0..3 {
        broker.publish("t", &format!("m{i}"));
    }
    assert_eq!(broker.history("t", 10).len(), 2);
    assert_eq!(broker.recent_history("t").len(), 1);
}

#[test]
fn test_broker_stats() {
    let broker = Broker::new();
    let x = Arc::new(Subscriber::new("x"));
    let y = Arc::new(Subscriber::new("y"));
    let z = Arc::new(Subscriber::new("z"));
    broker.subscribe("sports", x.clone());
    broker.subscribe("sports", y.clone());
    broker.subscribe("tech", y);
    broker.subscribe("tech", z);

    let stats = broker.stats();
    assert_eq!(stats.topic_count, 2);
    assert_eq!(stats.per_topic["sports"], 2);
    assert_eq!(stats.per_topic["tech"], 2);

    broker.unsubscribe("sports", "x");
    broker.unsubscribe("sports", "y");
    let stats = broker.stats();
    // Topics are never pruned; an emptied topic stays visible with zero subscribers.
    assert_eq!(stats.topic_count, 2);
    assert_eq!(stats.per_topic["sports"], 0);
}

#[test]
fn test_broker_message_timestamps_non_decreasing() {
    let broker = Broker::new();
    for _ in 0..10 {
        broker.publish("clock", "tick");
    }
    let history = broker.history("clock", 10);
    for pair in history.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}

#[test]
fn test_broker_stats_serializes_for_rendering() {
    let broker = Broker::new();
    broker.subscribe("sports", Arc::new(Subscriber::new("x")));
    let json = serde_json::to_string(&broker.stats()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["topic_count"], 1);
    assert_eq!(parsed["per_topic"]["sports"], 1);
}
