//! Error types for the vector engine crate.
//!
//! This module provides structured error types for tolerance validation,
//! DXF entity parsing and cut registration.

use garmentcut_core::RegistrationError;
use thiserror::Error;

/// Errors that can occur during vector processing.
#[derive(Error, Debug)]
pub enum VectorError {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// A file format error occurred.
    #[error("File format error: {0}")]
    FileFormat(#[from] FileFormatError),

    /// A cut registration error occurred.
    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// Errors related to processing parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Parameters are mutually incompatible.
    #[error("Incompatible parameters: {0}")]
    Incompatible(String),
}

/// Errors related to DXF text parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FileFormatError {
    /// The file is not valid UTF-8 text.
    #[error("File is not readable text: {0}")]
    NotText(String),

    /// A Y coordinate appeared before any X coordinate of its entity.
    #[error("DXF parse error at line {line}: Y coordinate without a preceding X")]
    OrphanY { line: usize },

    /// A coordinate token could not be parsed as a number.
    #[error("DXF parse error at line {line}: malformed coordinate '{token}'")]
    MalformedCoordinate { line: usize, token: String },
}

/// Result type alias for vector operations.
pub type VectorResult<T> = Result<T, VectorError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Result type alias for file format operations.
pub type FileFormatResult<T> = Result<T, FileFormatError>;
