//! # GarmentCut Vector Engine
//!
//! Reconstructs closed cutting paths for garment pieces from DXF line and
//! polyline entities.
//!
//! ## Pipeline
//!
//! - **Geometry Kernel**: distance, point-in-polygon, area, length, segment intersection
//! - **Path Simplifier**: single-pass removal of near-collinear and near-duplicate points
//! - **Path Repairer**: gap closing and self-intersection splitting with an audit log
//! - **Contour Classifier**: exterior / interior / notch decisions via containment
//! - **Vector File Processor**: parses DXF text and runs the stages above
//!
//! ## Operator Tooling
//!
//! - **SVG Preview**: status-coloured rendering with repair overlays
//! - **Cut Registration**: per-piece status cycling with listener notification

pub mod classify;
pub mod dxf_parser;
pub mod error;
pub mod geometry;
pub mod processor;
pub mod registration;
pub mod repair;
pub mod simplify;
pub mod svg_renderer;

pub use classify::{analyze_contour, classify_paths, is_significant, ClassifyParameters};
pub use dxf_parser::{DxfEntity, DxfEntityType, DxfParser, MalformedToken};
pub use error::{
    FileFormatError, FileFormatResult, ParameterError, ParameterResult, VectorError, VectorResult,
};
pub use processor::{
    ProcessedFile, ProcessingSummary, VectorFileProcessor, VectorProcessingParameters,
};
pub use registration::{CutRegistration, StatusCounts};
pub use repair::{is_path_closed, repair_path, RepairOutcome, RepairParameters};
pub use simplify::{simplify_path, SimplifyParameters};
pub use svg_renderer::{calculate_view_box, path_to_svg_data, render_svg, SvgRenderOptions};
