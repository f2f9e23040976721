//! # MemBus
//!
//! `membus` is a minimalist, in-process publish/subscribe message broker built
//! with Rust. Publishers address messages to named topics; the broker fans
//! each message out to every subscriber currently registered for that topic
//! and keeps a bounded per-topic history for replay and inspection.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `broker`: The central component that manages topics, subscribers, message
//!   routing and per-topic history.
//! - `subscriber`: An addressable inbox that accepts delivered messages.
//! - `config`: Handles loading and merging broker configuration.
//! - `utils`: Shared utilities, such as error types and logging setup.

pub mod broker;
pub mod config;
pub mod subscriber;
pub mod utils;

pub use broker::{Broker, BrokerStats};
pub use broker::message::Message;
pub use subscriber::Subscriber;
