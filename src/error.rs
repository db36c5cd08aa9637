//! Error type shared by the generator, the filter store and the session.

use thiserror::Error;

/// Errors reported by graph generation and attribute updates.
///
/// Every mutator either applies its update to all nodes or fails with one of
/// these before touching anything.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Node not found: {0}")]
    NotFound(String),
}
