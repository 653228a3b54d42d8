//! Pure layout math for thumbnails, rows, and the montage grid.
//!
//! All functions here are pure and testable without decoding a single image.
//! The compositing code in [`crate::pack`] and the resize in
//! [`crate::thumbs`] consume these results.

/// Shrink `dims` to fit within `bounds`, preserving aspect ratio.
///
/// Scale down only: an image already inside both bounds is returned
/// unchanged, never enlarged. Dimensions are rounded and floored at 1px.
pub fn fit_within(dims: (u32, u32), bounds: (u32, u32)) -> (u32, u32) {
    let (w, h) = dims;
    let (max_w, max_h) = bounds;

    if w <= max_w && h <= max_h {
        return dims;
    }

    let scale = (max_w as f64 / w as f64).min(max_h as f64 / h as f64);
    let fit_w = ((w as f64 * scale).round() as u32).max(1);
    let fit_h = ((h as f64 * scale).round() as u32).max(1);
    (fit_w, fit_h)
}

/// Partition `count` thumbnails into row sizes of exactly `columns`, with the
/// remainder (1..=columns) in the final row. Zero-size rows are never
/// produced; an empty input yields no rows.
pub fn split_rows(count: usize, columns: usize) -> Vec<usize> {
    let full = count / columns;
    let rest = count % columns;

    let mut sizes = vec![columns; full];
    if rest > 0 {
        sizes.push(rest);
    }
    sizes
}

/// Canvas size for one row of thumbnails with the given (width, height)
/// dimensions.
///
/// Width reserves `columns` margins regardless of how many members the row
/// actually has — the final row of a non-full grid gets the same padding as
/// a full one, so all rows share one width formula (see DESIGN.md). Height
/// is the tallest member; shorter members leave transparent space below.
pub fn row_size(members: &[(u32, u32)], columns: u32, margin: u32) -> (u32, u32) {
    let width: u32 = members.iter().map(|&(w, _)| w).sum::<u32>() + columns * margin;
    let height = members.iter().map(|&(_, h)| h).max().unwrap_or(0);
    (width, height)
}

/// Canvas size for the montage given its row dimensions.
///
/// Width is the widest row; narrower rows leave transparent space to their
/// right. Height sums the rows plus one margin per row.
pub fn montage_size(rows: &[(u32, u32)], margin: u32) -> (u32, u32) {
    let width = rows.iter().map(|&(w, _)| w).max().unwrap_or(0);
    let height: u32 = rows.iter().map(|&(_, h)| h).sum::<u32>() + rows.len() as u32 * margin;
    (width, height)
}

/// Reorder items for tighter packing: ascending height, and descending width
/// within equal heights.
///
/// Implemented as two stable passes — descending width, then ascending
/// height — so that tie behavior is exactly the second sort's view of the
/// first sort's output.
pub fn fit_sort<T>(items: &mut [T], dims: impl Fn(&T) -> (u32, u32)) {
    items.sort_by(|a, b| dims(b).0.cmp(&dims(a).0));
    items.sort_by(|a, b| dims(a).1.cmp(&dims(b).1));
}
