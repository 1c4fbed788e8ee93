//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - JSON or pretty formatting on stderr
//! - Level filtering seeded from configuration, overridable by `RUST_LOG`

pub mod logger;

pub use logger::{LogFormat, LoggerImpl};
