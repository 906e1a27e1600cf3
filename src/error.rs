/// Recognized, user-facing failures
///
/// A `Failed` error is printed as a one-line message without any context
/// chain. Everything else travels as a plain `anyhow::Error` and is printed
/// with full detail.
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Failed {
    message: String,
}

impl Failed {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// Append the cause as `"<message>: <cause>"`
    pub fn with_cause(message: impl Into<String>, cause: impl Display) -> Self {
        Self { message: format!("{}: {}", message.into(), cause) }
    }
}
