//! DXF entity parser
//!
//! Reads the line-oriented DXF subset used by pattern exports: `LINE` and
//! `POLYLINE` entities with coordinate group codes 10/11 (X) and 20/21 (Y).
//! Every other group code, section and entity type is ignored.

use crate::error::{FileFormatError, FileFormatResult};
use garmentcut_core::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Supported entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DxfEntityType {
    Line,
    Polyline,
}

impl DxfEntityType {
    fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "LINE" => Some(Self::Line),
            "POLYLINE" => Some(Self::Polyline),
            _ => None,
        }
    }
}

impl fmt::Display for DxfEntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line => write!(f, "LINE"),
            Self::Polyline => write!(f, "POLYLINE"),
        }
    }
}

/// A coordinate value that did not parse as a number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedToken {
    /// 1-based source line of the value
    pub line: usize,
    pub token: String,
}

/// One parsed entity, as an ordered point stream
#[derive(Debug, Clone, PartialEq)]
pub struct DxfEntity {
    pub entity_type: DxfEntityType,
    /// 1-based source line of the entity marker
    pub line: usize,
    pub points: Vec<Point>,
    /// Coordinate tokens that were read as NaN
    pub malformed: Vec<MalformedToken>,
}

impl DxfEntity {
    fn new(entity_type: DxfEntityType, line: usize) -> Self {
        Self {
            entity_type,
            line,
            points: Vec::new(),
            malformed: Vec::new(),
        }
    }

    /// Fails with the first malformed coordinate, if any
    pub fn check_coordinates(&self) -> FileFormatResult<()> {
        match self.malformed.first() {
            Some(bad) => Err(FileFormatError::MalformedCoordinate {
                line: bad.line,
                token: bad.token.clone(),
            }),
            None => Ok(()),
        }
    }
}

const SEQEND: &str = "SEQEND";

/// DXF subset parser
pub struct DxfParser;

impl DxfParser {
    /// Parse every LINE/POLYLINE entity in `content`.
    ///
    /// After an entity marker the parser reads `code, value` line pairs until
    /// either line of a pair is `SEQEND` or the input ends. A value missing at
    /// the end of input reads as NaN. A Y coordinate before the entity's first
    /// X fails the whole file.
    pub fn parse(content: &str) -> FileFormatResult<Vec<DxfEntity>> {
        let lines: Vec<&str> = content.lines().collect();
        let mut entities = Vec::new();
        let mut i = 0;

        while i < lines.len() {
            let Some(entity_type) = DxfEntityType::from_marker(lines[i].trim()) else {
                i += 1;
                continue;
            };

            let mut entity = DxfEntity::new(entity_type, i + 1);
            i += 1;

            while i < lines.len() {
                let code = lines[i].trim();
                if code == SEQEND {
                    i += 1;
                    break;
                }

                let value_line = i + 2;
                let value = lines.get(i + 1).map(|v| v.trim());
                if value == Some(SEQEND) {
                    i += 2;
                    break;
                }

                match code {
                    "10" | "11" => {
                        let x = Self::read_coordinate(value, value_line, &mut entity);
                        entity.points.push(Point::new(x, 0.0));
                    }
                    "20" | "21" => {
                        let y = Self::read_coordinate(value, value_line, &mut entity);
                        match entity.points.last_mut() {
                            Some(point) => point.y = y,
                            None => return Err(FileFormatError::OrphanY { line: i + 1 }),
                        }
                    }
                    _ => {}
                }

                i += 2;
            }

            debug!(
                "Parsed {} entity at line {} with {} points",
                entity.entity_type,
                entity.line,
                entity.points.len()
            );
            entities.push(entity);
        }

        Ok(entities)
    }

    fn read_coordinate(value: Option<&str>, line: usize, entity: &mut DxfEntity) -> f64 {
        let token = value.unwrap_or("");
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => v,
            // `nan` and `inf` parse, but are not coordinates
            _ => {
                entity.malformed.push(MalformedToken {
                    line,
                    token: token.to_string(),
                });
                f64::NAN
            }
        }
    }
}
