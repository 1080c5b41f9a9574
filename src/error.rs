// ---------------------------
// ## Error Handling
// ---------------------------

use thiserror::Error;

/// Errors raised by the prediction pipeline.
///
/// Every variant is a client-side problem; the HTTP layer maps them all to
/// `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AstrologyError {
    /// Missing or unparseable date, time, name or other request field.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// A `locationId` that is not in the city table.
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
}

impl AstrologyError {
    pub fn invalid(message: impl Into<String>) -> Self {
        AstrologyError::InvalidInput(message.into())
    }
}

pub type Result<T, E = AstrologyError> = std::result::Result<T, E>;
