//! Caption rendering onto a thumbnail.
//!
//! Glyphs come from a TrueType font loaded off disk with `rusttype`;
//! coverage values are alpha-blended into the thumbnail's RGBA buffer.
//! Placement and size are the named defaults in [`crate::config`]: a fixed
//! offset from the top-left corner, 16 pt, white. Text that falls outside
//! the image (short thumbnails put the offset below the bottom edge) is
//! clipped, not an error.

use crate::config::{CAPTION_COLOR, CAPTION_OFFSET, CAPTION_SIZE_PT};
use image::{Rgba, RgbaImage};
use rusttype::{Font, Scale, point};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaptionError {
    #[error("Cannot read font {0}: {1}")]
    FontRead(PathBuf, std::io::Error),
    #[error("Not a usable TrueType font: {0}")]
    FontParse(PathBuf),
}

/// Load and parse a TrueType font file.
pub fn load_font(path: &Path) -> Result<Font<'static>, CaptionError> {
    let bytes = std::fs::read(path).map_err(|e| CaptionError::FontRead(path.to_path_buf(), e))?;
    Font::try_from_vec(bytes).ok_or_else(|| CaptionError::FontParse(path.to_path_buf()))
}

/// Draw the caption text at the fixed offset, in the fixed size and color.
pub fn draw_caption(image: &mut RgbaImage, font: &Font, text: &str) {
    draw_text(
        image,
        text,
        font,
        Scale::uniform(CAPTION_SIZE_PT),
        CAPTION_OFFSET.0,
        CAPTION_OFFSET.1,
        Rgba(CAPTION_COLOR),
    );
}

/// Alpha-blend `overlay` into `base` (over operator, result opaque-biased).
fn blend_pixel(base: &mut Rgba<u8>, overlay: &Rgba<u8>) {
    let alpha = overlay[3] as f32 / 255.0;
    if alpha <= 0.0 {
        return;
    }

    let inv_alpha = 1.0 - alpha;
    for idx in 0..3 {
        base[idx] = (overlay[idx] as f32 * alpha + base[idx] as f32 * inv_alpha)
            .round()
            .clamp(0.0, 255.0) as u8;
    }
    base[3] = base[3].max(overlay[3]);
}

/// Rasterize `text` at `(x, y)` onto `canvas`, clipping at the edges.
fn draw_text(
    canvas: &mut RgbaImage,
    text: &str,
    font: &Font,
    scale: Scale,
    x: u32,
    y: u32,
    color: Rgba<u8>,
) {
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<_> = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .collect();

    for glyph in glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, gv| {
                let px = x as i32 + gx as i32 + bb.min.x;
                let py = y as i32 + gy as i32 + bb.min.y;

                if px < 0 || py < 0 || px >= canvas.width() as i32 || py >= canvas.height() as i32 {
                    return;
                }

                let alpha = (gv * color[3] as f32).round() as u8;
                let overlay = Rgba([color[0], color[1], color[2], alpha]);
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                blend_pixel(pixel, &overlay);
            });
        }
    }
}
