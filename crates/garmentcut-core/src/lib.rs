//! # GarmentCut Core
//!
//! Core types, traits, and utilities for GarmentCut.
//! Provides the data model shared by the vector engine, the settings layer
//! and whatever application hosts the cut registration workflow.

pub mod core;
pub mod data;
pub mod error;

pub use crate::core::{
    document::{DocumentRenderer, Page, RasterImage},
    listener::{StatusListener, StatusListenerHandle},
};

pub use data::{
    BoundingBox, ContourAnalysis, PathRepair, PathSegment, PieceStatus, PieceStatusRecord, Point,
    RepairKind, SegmentKind, VectorPath,
};

pub use error::{Error, RegistrationError, Result};
