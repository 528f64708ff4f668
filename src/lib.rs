/// Error types for the monitor
pub mod error;

/// Colors and log lines
pub mod events;

/// Observer registry and stakeholder roles
pub mod alerts;

/// Motion detection rule
pub mod triggers;

/// Sensor-facing pass-through
pub mod server;

/// Append-only alert log sinks
pub mod display;

/// Configuration management
pub mod config;

/// Interactive terminal front end
pub mod shell;

// Re-export commonly used types
pub use error::{ConfigError, DisplayError};
pub use events::{Color, LogLine};
