//! Run configuration.
//!
//! A [`MontageConfig`] is built once from the parsed command line and passed
//! by reference into every pipeline stage — nothing reads global state. The
//! caption placement constants live here as named defaults rather than
//! literals scattered through the drawing code.

use std::path::PathBuf;

/// Horizontal and vertical caption offset from a thumbnail's top-left corner,
/// in pixels.
pub const CAPTION_OFFSET: (u32, u32) = (10, 200);

/// Caption font size in points.
pub const CAPTION_SIZE_PT: f32 = 16.0;

/// Caption color (white, fully opaque).
pub const CAPTION_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Font used when `--font` is not given.
pub const DEFAULT_FONT: &str = "/usr/share/fonts/TTF/DejaVuSans.ttf";

/// Immutable parameters for one montage run.
#[derive(Debug, Clone)]
pub struct MontageConfig {
    /// Thumbnails per row.
    pub columns: u32,
    /// Pixel gap between adjacent thumbnails and between adjacent rows.
    pub margin: u32,
    /// Thumbnail height bound in pixels (scale down only).
    pub height: u32,
    /// Thumbnail width bound in pixels (scale down only).
    pub width: u32,
    /// TrueType font file used for captions.
    pub font: PathBuf,
    /// Caption template with `$index` and `$basename` placeholders.
    pub text_format: String,
    /// Reorder thumbnails by ascending height, descending width within ties.
    pub fit: bool,
    /// Source directory, scanned non-recursively.
    pub dir: PathBuf,
    /// Output file path; format inferred from the extension.
    pub out: PathBuf,
}

impl Default for MontageConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            margin: 3,
            height: 400,
            width: 500,
            font: PathBuf::from(DEFAULT_FONT),
            text_format: "[$index] $basename".to_string(),
            fit: false,
            dir: PathBuf::new(),
            out: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_match_cli_defaults() {
        let config = MontageConfig::default();
        assert_eq!(config.columns, 4);
        assert_eq!(config.margin, 3);
        assert_eq!(config.height, 400);
        assert_eq!(config.width, 500);
        assert_eq!(config.font, PathBuf::from(DEFAULT_FONT));
        assert_eq!(config.text_format, "[$index] $basename");
        assert!(!config.fit);
    }
}
