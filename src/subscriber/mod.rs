//! The `subscriber` module defines the receiving side of the Pub/Sub system.
//!
//! It provides the `Subscriber` struct: an addressable inbox identified by a
//! unique id, which buffers delivered messages until a higher layer drains it.

pub mod inbox;
pub use inbox::Subscriber;
