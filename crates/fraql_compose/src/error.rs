//! Error types for the compose layer.

use thiserror::Error;

/// Errors produced while composing a request document.
///
/// Both variants are fatal to the call that produced them and are raised
/// synchronously, before any transport is involved. A failed call leaves no
/// partial state behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// The query text contains no named operation.
    ///
    /// The operation must match `query <Name>` or `mutation <Name>`;
    /// anonymous operations are not supported.
    #[error("no named operation found: expected `query <Name>` or `mutation <Name>`")]
    InvalidQuery,

    /// The fragment source contains no extractable fragment name.
    #[error("no fragment name found: expected `fragment <Name> on <Type> {{ ... }}`")]
    InvalidFragment,
}

/// Type alias for compose results.
pub type ComposeResult<T> = std::result::Result<T, ComposeError>;
