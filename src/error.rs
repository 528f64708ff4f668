use thiserror::Error;

/// Errors that can occur when appending a line to the alert log
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("Display is not ready")]
    NotReady,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode log line: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}
