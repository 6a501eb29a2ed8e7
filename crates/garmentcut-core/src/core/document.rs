//! Document rendering interface
//!
//! The pattern PDF viewer relies on an environment-provided decoder and
//! rasterizer. It is reached only through this trait so that the cut engine
//! carries no rendering dependency.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One decoded page of a pattern document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page index (0-based)
    pub index: usize,
    /// Page width in points
    pub width: f64,
    /// Page height in points
    pub height: f64,
}

/// Rendered page bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data (4 bytes per pixel)
    pub pixels: Vec<u8>,
}

impl RasterImage {
    /// A fully transparent image of the given size
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.pixels.len() == self.width as usize * self.height as usize * 4
    }
}

/// Decodes pattern documents and renders their pages
pub trait DocumentRenderer {
    /// Decode raw document bytes into pages
    fn decode_document(&self, bytes: &[u8]) -> Result<Vec<Page>>;

    /// Rasterize one page at the given scale (1.0 = one pixel per point)
    fn render_page(&self, page: &Page, scale: f64) -> Result<RasterImage>;
}
