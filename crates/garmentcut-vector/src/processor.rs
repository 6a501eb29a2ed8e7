//! Vector file processor
//!
//! Turns raw DXF text into classified cutting paths:
//! parse -> chain -> simplify -> repair -> analyse -> classify -> filter.
//! Malformed input never escapes as an error; it is reported through the
//! diagnostics of an empty [`ProcessedFile`].

use crate::classify::{analyze_contour, classify_paths, is_significant, ClassifyParameters};
use crate::dxf_parser::DxfParser;
use crate::error::{FileFormatError, ParameterResult};
use crate::geometry::chain_points;
use crate::repair::{is_path_closed, repair_path, RepairParameters};
use crate::simplify::{simplify_path, SimplifyParameters};
use garmentcut_core::{RepairKind, VectorPath};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// All tolerances used by one processing run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorProcessingParameters {
    /// Reject entities with unparseable coordinates instead of reading NaN
    pub strict_numbers: bool,
    pub simplify: SimplifyParameters,
    pub repair: RepairParameters,
    pub classify: ClassifyParameters,
}

impl VectorProcessingParameters {
    pub fn validate(&self) -> ParameterResult<()> {
        self.simplify.validate()?;
        self.repair.validate()?;
        self.classify.validate()?;
        Ok(())
    }
}

/// Counters for one processing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingSummary {
    /// LINE/POLYLINE entities found in the file
    pub entities: usize,
    /// Entities dropped by strict numeric mode
    pub rejected_entities: usize,
    /// Unrepaired notch candidates dropped before classification
    pub rejected_notches: usize,
    /// Classified paths removed by the significance filter
    pub filtered: usize,
    pub paths: usize,
    pub exterior: usize,
    pub repairs: usize,
    pub gap_repairs: usize,
    pub intersection_repairs: usize,
    pub open_after_repair: usize,
}

/// Outcome of processing one file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedFile {
    pub paths: Vec<VectorPath>,
    pub diagnostics: Vec<String>,
    pub summary: ProcessingSummary,
    /// Set when the file could not be processed at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessedFile {
    fn failed(err: FileFormatError) -> Self {
        let message = format!("Error processing file: {}", err);
        Self {
            paths: Vec::new(),
            diagnostics: vec![message],
            summary: ProcessingSummary::default(),
            error: Some(err.to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Diagnostics joined into one report
    pub fn message(&self) -> String {
        self.diagnostics.join("\n")
    }
}

/// Runs the cut-path pipeline over DXF input
#[derive(Debug, Clone, Default)]
pub struct VectorFileProcessor {
    params: VectorProcessingParameters,
}

impl VectorFileProcessor {
    /// Create a processor after validating its parameters
    pub fn new(params: VectorProcessingParameters) -> ParameterResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &VectorProcessingParameters {
        &self.params
    }

    /// Process raw file bytes, which must be UTF-8 text
    pub fn process_bytes(&self, bytes: &[u8]) -> ProcessedFile {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.process(text),
            Err(e) => {
                warn!("Vector file is not UTF-8: {}", e);
                ProcessedFile::failed(FileFormatError::NotText(e.to_string()))
            }
        }
    }

    /// Process DXF text
    pub fn process(&self, content: &str) -> ProcessedFile {
        let params = &self.params;

        let entities = match DxfParser::parse(content) {
            Ok(entities) => entities,
            Err(e) => {
                warn!("Failed to parse vector file: {}", e);
                return ProcessedFile::failed(e);
            }
        };

        let mut summary = ProcessingSummary {
            entities: entities.len(),
            ..Default::default()
        };
        let mut diagnostics = Vec::new();
        let mut candidates: Vec<VectorPath> = Vec::new();

        for (index, entity) in entities.iter().enumerate() {
            let ordinal = index + 1;

            if params.strict_numbers {
                if let Err(err) = entity.check_coordinates() {
                    warn!("Rejecting entity {}: {}", ordinal, err);
                    if let FileFormatError::MalformedCoordinate { token, .. } = &err {
                        diagnostics.push(format!(
                            "Rejected entity {}: malformed coordinate '{}'",
                            ordinal, token
                        ));
                    }
                    summary.rejected_entities += 1;
                    continue;
                }
            }

            if entity.points.len() < 2 {
                debug!("Skipping entity {} with {} points", ordinal, entity.points.len());
                continue;
            }

            let segments = chain_points(&entity.points);
            let simplified = simplify_path(&segments, &params.simplify);
            let outcome = repair_path(&simplified, &params.repair);
            let analysis = analyze_contour(&outcome.segments, &params.classify);

            if analysis.is_notch && outcome.repairs.is_empty() {
                debug!(
                    "Rejecting entity {} as notch (length {:.2})",
                    ordinal, analysis.length
                );
                summary.rejected_notches += 1;
                continue;
            }

            let id = format!("piece-{}", candidates.len() + 1);
            debug!(
                "Accepted entity {} as {} with {} segments and {} repairs",
                ordinal,
                id,
                outcome.segments.len(),
                outcome.repairs.len()
            );
            candidates.push(VectorPath::new(id, outcome.segments, outcome.repairs));
        }

        let analyses = classify_paths(&mut candidates, &params.classify);
        let before = candidates.len();
        let paths: Vec<VectorPath> = candidates
            .into_iter()
            .zip(analyses)
            .filter(|(path, analysis)| is_significant(path, analysis, &params.classify))
            .map(|(path, _)| path)
            .collect();

        summary.filtered = before - paths.len();
        summary.paths = paths.len();
        summary.exterior = paths.iter().filter(|p| p.is_exterior).count();
        for repair in paths.iter().flat_map(|p| p.repairs.iter()) {
            summary.repairs += 1;
            match repair.kind {
                RepairKind::Gap => summary.gap_repairs += 1,
                RepairKind::Intersection => summary.intersection_repairs += 1,
            }
        }
        summary.open_after_repair = paths
            .iter()
            .filter(|p| !is_path_closed(&p.segments, params.repair.gap_epsilon))
            .count();

        diagnostics.extend(Self::report(&paths, &summary));

        info!(
            "Processed {} entities into {} pieces ({} exterior, {} repairs, {} open)",
            summary.entities,
            summary.paths,
            summary.exterior,
            summary.repairs,
            summary.open_after_repair
        );

        ProcessedFile {
            paths,
            diagnostics,
            summary,
            error: None,
        }
    }

    fn report(paths: &[VectorPath], summary: &ProcessingSummary) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Processed {} pieces ({} exterior).",
                summary.paths, summary.exterior
            ),
            format!("{} repairs made.", summary.repairs),
        ];

        lines.extend(
            paths
                .iter()
                .flat_map(|p| p.repairs.iter())
                .map(|repair| repair.to_string()),
        );

        if summary.rejected_notches > 0 || summary.filtered > 0 {
            lines.push(format!(
                "Skipped {} notches and {} insignificant paths.",
                summary.rejected_notches, summary.filtered
            ));
        }
        if summary.open_after_repair > 0 {
            lines.push(format!("{} paths remain open", summary.open_after_repair));
        }

        lines
    }
}
