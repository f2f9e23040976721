mod settings;

use config::{Config, ConfigError, Environment, File};

use crate::config::settings::PartialSettings;

pub use settings::{BrokerSettings, LogSettings, Settings};

/// Loads the configuration from the default file and environment variables.
/// Merges the configuration with default values.
/// Returns a `Settings` struct containing the broker and log configurations.
pub fn load_config() -> Result<Settings, ConfigError> {
    // Pick up a local .env file, if any, before reading the environment.
    let _ = dotenvy::dotenv();

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        broker: BrokerSettings {
            history_capacity: partial
                .broker
                .as_ref()
                .and_then(|b| b.history_capacity)
                .unwrap_or(default.broker.history_capacity),
            default_history_limit: partial
                .broker
                .as_ref()
                .and_then(|b| b.default_history_limit)
                .unwrap_or(default.broker.default_history_limit),
        },
        log: LogSettings {
            level: partial
                .log
                .as_ref()
                .and_then(|l| l.level.clone())
                .unwrap_or(default.log.level),
        },
    })
}
