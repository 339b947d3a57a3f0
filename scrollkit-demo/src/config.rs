//! Demo configuration.

use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

/// Environment variable overriding the log file path.
pub const LOG_PATH_VAR: &str = "SCROLLKIT_DEMO_LOG";

/// Environment variable overriding the log level.
pub const LOG_LEVEL_VAR: &str = "SCROLLKIT_DEMO_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Where the file logger writes; stdout belongs to the UI.
    pub log_path: PathBuf,

    pub log_level: LevelFilter,

    /// Number of generated document lines.
    pub line_count: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("scrollkit-demo.log"),
            log_level: LevelFilter::Debug,
            line_count: 200,
        }
    }
}

impl DemoConfig {
    /// Defaults with environment overrides applied. Unparseable values are
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(path) = lookup(LOG_PATH_VAR) {
            config.log_path = PathBuf::from(path);
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR).and_then(|l| LevelFilter::from_str(&l).ok()) {
            config.log_level = level;
        }
        config
    }
}
