use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    #[error("no path group; start a new visitor first")]
    NoPathGroup,
    #[error("no active path")]
    NoActivePath,
}

/// Dispatch only fails when the path model rejects a call.
pub type GestureError = DrawError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
