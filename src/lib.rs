//! # GarmentCut
//!
//! Cut-path reconstruction and cut registration for garment production
//! patterns exported as DXF.
//!
//! ## Architecture
//!
//! GarmentCut is organized as a workspace with multiple crates:
//!
//! 1. **garmentcut-core** - Data model, piece status cycle, collaborator traits
//! 2. **garmentcut-vector** - Geometry kernel, simplifier, repairer, classifier, DXF processing
//! 3. **garmentcut-settings** - Processing and preview configuration with persistence
//! 4. **garmentcut** - Command line binary that integrates all crates
//!
//! ## Features
//!
//! - **Path Reconstruction**: LINE/POLYLINE entities become closed cutting paths
//! - **Auto Repair**: Small gaps are bridged and self-intersections split, with an audit log
//! - **Classification**: Exterior contours, interior holes and notches via containment
//! - **Preview**: SVG rendering coloured by cutting status

pub mod cli;

pub use garmentcut_core::{
    BoundingBox, DocumentRenderer, Error, PathRepair, PathSegment, PieceStatus,
    PieceStatusRecord, Point, Result, StatusListener, VectorPath,
};

pub use garmentcut_vector::{
    render_svg, CutRegistration, ProcessedFile, ProcessingSummary, SvgRenderOptions,
    VectorFileProcessor, VectorProcessingParameters,
};

pub use garmentcut_settings::{Config, SettingsManager};

use anyhow::Context;
use cli::CliOptions;
use std::path::Path;
use tracing::{info, warn};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr so stdout carries only results
/// - RUST_LOG environment variable support (INFO by default)
/// - JSON lines when `GARMENTCUT_LOG_FORMAT=json`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json = std::env::var("GARMENTCUT_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Load the settings named on the command line, or the user's settings
/// file when none was given
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return Config::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()));
    }

    match SettingsManager::with_default_path() {
        Ok(mut manager) => Ok(manager.load_or_default().clone()),
        Err(e) => {
            warn!("Using default settings: {}", e);
            Ok(Config::default())
        }
    }
}

/// Process one pattern file as described by the command line options.
/// Writes the SVG preview when one was requested.
pub fn run(options: &CliOptions) -> anyhow::Result<ProcessedFile> {
    let config = load_config(options.config.as_deref())?;

    let mut params = config.processing;
    if options.force_close {
        params.repair.force_close = true;
    }
    if options.strict {
        params.strict_numbers = true;
    }
    let processor = VectorFileProcessor::new(params).context("Invalid processing parameters")?;

    let bytes = std::fs::read(&options.input)
        .with_context(|| format!("Failed to read {}", options.input.display()))?;
    info!("Processing {}", options.input.display());
    let result = processor.process_bytes(&bytes);

    if let Some(svg_path) = &options.svg {
        let mut render = config.preview.render_options();
        if options.hide_repairs {
            render.show_repairs = false;
        }
        std::fs::write(svg_path, render_svg(&result.paths, &render))
            .with_context(|| format!("Failed to write preview {}", svg_path.display()))?;
        info!("Wrote preview to {}", svg_path.display());
    }

    Ok(result)
}
