use serde::Deserialize;

/// Top-level configuration settings for the broker.
///
/// Includes settings for history retention and for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub broker: BrokerSettings,
    pub log: LogSettings,
}

/// Configuration settings for the broker core.
///
/// Controls per-topic history retention and the default history query limit.
#[derive(Debug, Deserialize, Clone)]
pub struct BrokerSettings {
    pub history_capacity: usize,
    pub default_history_limit: usize,
}

/// Configuration settings for logging.
#[derive(Debug, Deserialize, Clone)]
pub struct LogSettings {
    pub level: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub broker: Option<PartialBrokerSettings>,
    pub log: Option<PartialLogSettings>,
}

/// Partial broker settings.
///
/// Used for broker configuration from external sources with optional values.
#[derive(Debug, Deserialize)]
pub struct PartialBrokerSettings {
    pub history_capacity: Option<usize>,
    pub default_history_limit: Option<usize>,
}

/// Partial log settings.
#[derive(Debug, Deserialize)]
pub struct PartialLogSettings {
    pub level: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the broker has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            broker: BrokerSettings {
                history_capacity: 1000,
                default_history_limit: 10,
            },
            log: LogSettings {
                level: "info".to_string(),
            },
        }
    }
}
