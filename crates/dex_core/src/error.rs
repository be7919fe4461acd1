//! Chain resolution error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// A species reference without a positive integer id, or a chain without a root.
    #[error("Malformed chain node: {0}")]
    MalformedNode(String),

    /// The species lookup or the chain lookup failed or returned a non-success status.
    #[error("Evolution chain unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, ChainError>;
