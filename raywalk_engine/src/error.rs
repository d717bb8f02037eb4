//! Error types for the Raywalk engine
//!
//! The camera, slab test, and frontier traversal never fail. Errors only
//! surface while assembling a spatial index or validating configuration.

use std::fmt;

/// Result type for Raywalk engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Raywalk engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Spatial index assembly failed (unknown child, empty leaf, missing root)
    InvalidTree(String),

    /// A node key does not belong to the index it was used with
    InvalidNode(String),

    /// Camera or viewer configuration out of range
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTree(msg) => write!(f, "Invalid tree: {}", msg),
            Error::InvalidNode(msg) => write!(f, "Invalid node: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
