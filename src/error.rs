//! Error types shared across the console crate.

use thiserror::Error;

/// Unified result type for the console crate.
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Errors raised while building a column layout configuration.
///
/// Balancing itself cannot fail; these only surface when custom
/// breakpoints are constructed or deserialized.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A tier or the fallback asked for zero columns.
    #[error("column count must be non-zero")]
    ZeroColumns,
    /// A tier threshold was NaN or infinite.
    #[error("breakpoint width `{0}` is not finite")]
    NonFiniteWidth(f64),
    /// Two tiers share the same threshold.
    #[error("duplicate breakpoint at width {0}")]
    DuplicateTier(f64),

    /// A wider tier yields fewer columns than a narrower one.
    #[error("breakpoint at width {width} drops the column count")]
    DecreasingColumns {
        /// Threshold of the offending tier; `0` when the fallback is at fault.
        width: f64,
    },
}

/// Errors surfaced by services, controllers and actors.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The transport could not deliver the request.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered with a body that does not decode.
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// The requested record does not exist.
    #[error("`{path}` not found")]
    NotFound {
        /// Request path that produced the 404.
        path: String,
    },
    /// The server refused the request for the current session.
    #[error("{0}")]
    Unauthorized(String),
    /// Any other non-success status.
    #[error("{message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided message, or a generic one.
        message: String,
    },
    /// The board actor is gone.
    #[error("board channel closed")]
    ChannelClosed,
    /// Invalid layout configuration.
    #[error("layout configuration error: {0}")]
    Layout(#[from] LayoutError),
    /// Terminal backend failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    /// Message suitable for the notification surface.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized(message) | Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ConsoleError::Status {
            status: 400,
            message: "address is required".to_string(),
        };
        assert_eq!(err.user_message(), "address is required");
    }

    #[test]
    fn test_user_message_falls_back_to_display() {
        let err = ConsoleError::NotFound {
            path: "/api/v1/vdis/9/".to_string(),
        };
        assert_eq!(err.user_message(), "`/api/v1/vdis/9/` not found");
    }
}
