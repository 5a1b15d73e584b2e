//! Error types for the SCP solvers.

use thiserror::Error;

/// Errors surfaced by instance loading and by the solver drivers.
#[derive(Debug, Error)]
pub enum ScpError {
    /// A solver parameter is outside its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Some element is not covered by any subset, so no cover exists
    #[error("Infeasible instance: element {element} is not covered by any subset")]
    InfeasibleInstance { element: usize },

    /// The instance has more subsets than a chromosome can encode
    #[error("Instance has {subset_count} subsets but chromosomes hold at most {capacity}")]
    ChromosomeWidthExceeded { subset_count: usize, capacity: usize },

    /// Malformed instance text
    #[error("Parse error at token {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for SCP operations
pub type Result<T> = std::result::Result<T, ScpError>;
