//! Error handling for GarmentCut
//!
//! Provides the error type shared by the workspace crates. Crate-specific
//! errors (file formats, parameters, settings) convert into [`Error`] where
//! they cross a crate boundary.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Cut registration error type
///
/// Represents errors raised while recording the cutting state of pieces.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistrationError {
    /// No piece with the given id exists in the current file
    #[error("Unknown piece: {id}")]
    UnknownPiece {
        /// The piece id that was not found.
        id: String,
    },

    /// A status name could not be parsed
    #[error("Invalid piece status: {value}")]
    InvalidStatus {
        /// The rejected status text.
        value: String,
    },
}

/// Main error type for GarmentCut
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Cut registration error
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a registration error
    pub fn is_registration_error(&self) -> bool {
        matches!(self, Error::Registration(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
