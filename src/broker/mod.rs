pub mod engine;
pub mod history;
pub mod message;
pub mod topic;

pub use engine::{Broker, BrokerStats};

#[cfg(test)]
mod tests;
