use serde::{Deserialize, Serialize};

/// Top-level configuration for annocache
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Annotation cache configuration
    #[serde(default)]
    pub cache: CacheSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Annotation cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheSettings {
    /// Number of entries to pre-allocate
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Whether "no annotations found" results are cached.
    ///
    /// Safe while the introspector's metadata is immutable, which holds for
    /// a built `AnnotationRegistry`.
    #[serde(default = "default_true")]
    pub cache_empty_results: bool,
}

const fn default_initial_capacity() -> usize {
    256
}

const fn default_true() -> bool {
    true
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            cache_empty_results: default_true(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
