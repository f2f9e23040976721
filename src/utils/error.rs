//! The `error` module defines the error types used within `membus`.
//!
//! The broker operations themselves are total functions over their inputs and
//! never fail; errors only arise on the ambient surface, when loading
//! configuration or setting up logging.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("unrecognized log level `{0}`")]
    InvalidLogLevel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
