//! Error types for routing.

use thiserror::Error;

/// Router-specific errors.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No route matched the request. Maps to a 404 at the transport layer.
    #[error("no route matched: {method} {path}")]
    RouteNotFound { method: String, path: String },

    /// URL generation was asked for a name that was never registered.
    ///
    /// This is a configuration error in the calling code, not a runtime
    /// condition, and is never swallowed.
    #[error("route not found: {0}")]
    NamedRouteNotFound(String),

    /// A path template failed to compile. Fatal at load time: the router
    /// must not start serving with an uncompiled route.
    #[error("invalid path template {template:?}: {reason}")]
    InvalidPattern { template: String, reason: String },

    /// A request line could not be parsed.
    #[error("malformed request line: {0:?}")]
    MalformedRequestLine(String),

    /// An HTTP method token outside the supported set.
    #[error("unknown HTTP method: {0:?}")]
    UnknownMethod(String),
}

/// Result type alias for router operations.
pub type Result<T> = std::result::Result<T, RouterError>;
