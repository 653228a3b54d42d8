//! Row and montage compositing.
//!
//! A pure two-stage fold over the materialized thumbnail list: consecutive
//! groups of `columns` images become rows, rows become the montage. Canvases
//! start fully transparent; thumbnails are pasted top-aligned within their
//! row and rows left-aligned within the montage, so shorter or narrower
//! members leave zero-alpha slack. Sizing formulas live in [`crate::layout`].
//!
//! No file I/O happens here. The one failure mode is an empty input —
//! nothing survived thumbnail generation — which is reported as an error
//! rather than letting the size math collapse to a zero-area canvas.

use crate::layout;
use image::imageops::overlay;
use image::{Rgba, RgbaImage};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackError {
    #[error("No thumbnails to pack: the source directory held no processable .jpg files")]
    NoThumbnails,
}

fn transparent_canvas(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]))
}

/// Composite one row: members left-to-right at y=0, one margin after each.
fn pack_row(members: &[RgbaImage], columns: u32, margin: u32) -> RgbaImage {
    let dims: Vec<(u32, u32)> = members.iter().map(|m| m.dimensions()).collect();
    let (width, height) = layout::row_size(&dims, columns, margin);

    let mut row = transparent_canvas(width, height);
    let mut offset_x: i64 = 0;
    for member in members {
        overlay(&mut row, member, offset_x, 0);
        offset_x += member.width() as i64 + margin as i64;
    }
    row
}

/// Pack thumbnails into a single montage image.
///
/// Input order is final: the caller applies any fit sort beforehand. Every
/// image lands in exactly one row, every row in the one montage.
pub fn pack(images: &[RgbaImage], columns: u32, margin: u32) -> Result<RgbaImage, PackError> {
    if images.is_empty() {
        return Err(PackError::NoThumbnails);
    }

    let mut rows = Vec::new();
    let mut start = 0;
    for size in layout::split_rows(images.len(), columns as usize) {
        rows.push(pack_row(&images[start..start + size], columns, margin));
        start += size;
    }

    let row_dims: Vec<(u32, u32)> = rows.iter().map(|r| r.dimensions()).collect();
    let (width, height) = layout::montage_size(&row_dims, margin);

    let mut montage = transparent_canvas(width, height);
    let mut offset_y: i64 = 0;
    for row in &rows {
        overlay(&mut montage, row, 0, offset_y);
        offset_y += row.height() as i64 + margin as i64;
    }
    Ok(montage)
}
