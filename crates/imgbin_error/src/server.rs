//! HTTP server error types.

/// Error kinds for server startup and shutdown.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum ServerErrorKind {
    /// Failed to bind the configured listen address
    #[display("Failed to bind {}: {}", addr, source)]
    Bind {
        /// Address the server attempted to bind
        addr: String,
        /// Underlying bind failure
        source: String,
    },
    /// The accept loop terminated with an error
    #[display("Server terminated: {}", _0)]
    Serve(String),
}

/// Server error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Server Error: {} at line {} in {}", kind, line, file)]
pub struct ServerError {
    /// The error kind
    pub kind: ServerErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl ServerError {
    /// Create a new ServerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
