//! Error types for engine operations

use thiserror::Error;

/// Main error type for fasterdash operations.
///
/// Every operation is all-or-nothing: an error means no partial result
/// was produced.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Caller passed something the operation cannot accept
    /// (wrong arity, malformed key path, unknown sort direction, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A host-supplied callback selector failed during projection
    #[error("Selector failed: {0}")]
    SelectorFailure(String),

    /// Input contains a value the engine cannot represent or
    /// cannot convert back across the host boundary
    #[error("Unsupported value: {0}")]
    UnsupportedValue(String),

    /// Deep clone/merge walked past the recursion-depth bound,
    /// which usually means the input graph is cyclic
    #[error("Value nesting exceeds the depth bound of {limit}")]
    CycleDepthExceeded {
        /// The depth bound that was hit
        limit: usize,
    },

    /// One-time runtime setup failed; subsequent operations that need
    /// the shared worker pool will not have it until `initialize` is retried
    #[error("Initialization failed: {0}")]
    InitFailure(String),
}

/// Result type alias for fasterdash operations
pub type Result<T> = std::result::Result<T, EngineError>;
