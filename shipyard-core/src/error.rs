//! Error types for Shipyard core.

use std::{error::Error, fmt};

/// Error type for Shipyard core operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ShipyardError {
    /// The ship identifier was malformed or not a positive integer.
    InvalidIdentifier(String),
    /// No ship exists for the identifier.
    NotFound(i64),
    /// A field failed validation during create or update.
    InvalidField(&'static str),
    /// The request body or query string could not be parsed.
    MalformedRequest(String),
    /// The storage provider failed.
    Storage(String),
}

impl ShipyardError {
    /// Whether the error was caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Storage(_))
    }
}

impl fmt::Display for ShipyardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifier(raw) => write!(f, "invalid ship id: {raw}"),
            Self::NotFound(id) => write!(f, "ship {id} not found"),
            Self::InvalidField(field) => write!(f, "invalid value for field `{field}`"),
            Self::MalformedRequest(detail) => write!(f, "malformed request: {detail}"),
            Self::Storage(detail) => write!(f, "storage error: {detail}"),
        }
    }
}

impl Error for ShipyardError {}

/// Convenience result type for Shipyard core.
pub type Result<T> = std::result::Result<T, ShipyardError>;
