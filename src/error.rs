//! Error types for hull2d operations.

use thiserror::Error;

/// Errors that can occur at the crate boundary.
///
/// The geometric core itself is total: every hull or intersection computation
/// returns a defined result for every input. The only fallible surface is
/// resolving an algorithm by name on behalf of a caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HullError {
    /// The algorithm name did not match any known hull algorithm.
    #[error("unknown hull algorithm {name:?}")]
    UnknownAlgorithm {
        /// The name that failed to parse.
        name: String,
    },
}
