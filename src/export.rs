//! Image export
//!
//! The export path hands the rendered grid region to an external
//! rasterization collaborator and packages the capture as a named download.
//! Collaborator failure is propagated unchanged: no retry, no fallback.

use std::fmt;

use bytes::Bytes;
use log::{debug, info};

use crate::render::VisualGrid;

/// Download base filename
pub const EXPORT_BASENAME: &str = "bingo";

/// Download extension
pub const EXPORT_EXTENSION: &str = "png";

/// Full download name, e.g. `bingo.png`
pub const EXPORT_FILENAME: &str = "bingo.png";

/// Failure reported by the rasterization collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterizeError {
    pub message: String,
}

impl RasterizeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rasterization failed: {}", self.message)
    }
}

impl std::error::Error for RasterizeError {}

/// External rasterization capability.
///
/// Captures whatever grid it is handed at the moment of capture; the export
/// path makes no attempt to pin an earlier snapshot against later mutation.
pub trait Rasterizer {
    /// Capture the rendered grid region as image bytes
    fn capture(&self, region: &VisualGrid) -> Result<Bytes, RasterizeError>;
}

/// A completed export, ready to hand to the download channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Download name (fixed: [`EXPORT_FILENAME`])
    pub filename: String,
    /// Encoded image bytes from the rasterizer
    pub bytes: Bytes,
}

/// Bridge between the rendered grid and the rasterization collaborator
#[derive(Debug, Default)]
pub struct ExportBridge;

impl ExportBridge {
    pub fn new() -> Self {
        Self
    }

    /// Capture `region` through `rasterizer` and name the download.
    ///
    /// Errors from the collaborator pass through untouched.
    pub fn export_image<R: Rasterizer>(
        &self,
        rasterizer: &R,
        region: &VisualGrid,
    ) -> Result<Export, RasterizeError> {
        debug!("Capturing grid region ({} cells)", region.len());
        let bytes = rasterizer.capture(region)?;
        info!("Exported {} ({} bytes)", EXPORT_FILENAME, bytes.len());
        Ok(Export {
            filename: EXPORT_FILENAME.to_string(),
            bytes,
        })
    }
}
