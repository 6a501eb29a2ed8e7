//! Piece cutting status

use crate::error::RegistrationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cutting state of a piece, advanced by the operator one click at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceStatus {
    #[default]
    Uncut,
    Cut,
    Defect,
}

impl PieceStatus {
    /// Next state in the Uncut → Cut → Defect → Uncut cycle
    pub fn next(self) -> Self {
        match self {
            Self::Uncut => Self::Cut,
            Self::Cut => Self::Defect,
            Self::Defect => Self::Uncut,
        }
    }

    /// Preview stroke colour
    pub fn color(self) -> &'static str {
        match self {
            Self::Uncut => "#1f2937",
            Self::Cut => "#22c55e",
            Self::Defect => "#ef4444",
        }
    }
}

impl fmt::Display for PieceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncut => write!(f, "uncut"),
            Self::Cut => write!(f, "cut"),
            Self::Defect => write!(f, "defect"),
        }
    }
}

impl FromStr for PieceStatus {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uncut" => Ok(Self::Uncut),
            "cut" => Ok(Self::Cut),
            "defect" => Ok(Self::Defect),
            _ => Err(RegistrationError::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// Payload handed to the persistence collaborator on every status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceStatusRecord {
    pub id: String,
    pub status: PieceStatus,
    pub notes: String,
}

impl PieceStatusRecord {
    pub fn new(id: impl Into<String>, status: PieceStatus, notes: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status,
            notes: notes.into(),
        }
    }
}
