mod settings;

pub use settings::{ConfigError, Overrides, Settings, LOG_FILE};
