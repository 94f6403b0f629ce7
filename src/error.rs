//! Error types for parsing operations.

use thiserror::Error;

/// Errors that can occur when parsing a rank token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseRankError {
    /// Input is not a recognized rank token.
    #[error("not a recognized rank token")]
    InvalidToken,
}
