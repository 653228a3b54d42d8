//! # montage
//!
//! Tile a directory of `.jpg` images into a single grid image. Each source
//! image becomes a resized thumbnail with a caption overlaid, thumbnails are
//! packed into fixed-column rows, and the rows are stacked into one montage
//! written to disk.
//!
//! # Architecture: One Sequential Pass
//!
//! ```text
//! scan dir  →  thumbnail + caption each (lazy, skip-and-continue)
//!           →  materialize  →  optional fit sort  →  pack rows  →  save
//! ```
//!
//! There is no concurrency and no intermediate state on disk: everything
//! stays in memory until the final image is written. A file that fails to
//! decode or caption is logged and skipped; it never aborts the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Non-recursive directory enumeration, `.jpg` name filter |
//! | [`thumbs`] | Lazy per-file decode → shrink → caption with skip-and-continue |
//! | [`template`] | `$index` / `$basename` caption template substitution |
//! | [`caption`] | TrueType font loading and glyph rendering onto a thumbnail |
//! | [`layout`] | Pure layout math: bound fitting, row partitioning, canvas sizes, fit sort |
//! | [`pack`] | Row and montage compositing over transparent canvases |
//! | [`config`] | Immutable run parameters and named caption defaults |
//! | [`output`] | Progress / skip line formatting for the CLI |
//!
//! # Design Decisions
//!
//! ## Fit Sort Is Two Stable Passes
//!
//! `--fit` reorders thumbnails by descending width, then by ascending
//! height. Because both passes are stable, the visible order is ascending
//! height with descending width breaking ties — images of equal height sit
//! side by side, widest first, which tightens the row silhouettes.
//!
//! ## Rows Reserve Full-Column Margins
//!
//! Every row's canvas width adds `columns × margin`, even when the last row
//! holds fewer images. This keeps the output bit-compatible with the
//! historical layout; see DESIGN.md for the trade-off.
//!
//! ## Per-File Failure Is Not Failure
//!
//! The generator yields a `Result` per file. Corrupt images, a missing
//! font, or a bad template placeholder skip that file with a stderr notice;
//! only structural problems (unreadable directory, zero usable images,
//! unwritable output) end the run.

pub mod caption;
pub mod config;
pub mod layout;
pub mod output;
pub mod pack;
pub mod scan;
pub mod template;
pub mod thumbs;
