//! Thumbnail generation: decode → shrink → caption, one image at a time.
//!
//! [`generate`] returns a lazy iterator over per-file outcomes. A file that
//! fails anywhere along the way — unreadable, undecodable, bad template
//! reference, unusable font — yields a [`Skipped`] value instead of halting
//! the sequence; the caller logs it and moves on. Indices are assigned in
//! enumeration order before any file is touched, so a skipped file still
//! consumes its index.
//!
//! The whole sequence is materialized by the caller (the packer needs every
//! thumbnail's dimensions before it can lay out a single row), so memory
//! scales with the total pixel area of all thumbnails.

use crate::caption::{self, CaptionError};
use crate::config::MontageConfig;
use crate::layout;
use crate::scan::SourceEntry;
use crate::template::{CaptionTemplate, TemplateError};
use image::imageops::FilterType;
use image::{ImageReader, RgbaImage};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThumbError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to decode {0}: {1}")]
    Decode(PathBuf, image::ImageError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Caption(#[from] CaptionError),
}

/// A resized, caption-annotated thumbnail ready for packing.
#[derive(Debug)]
pub struct Thumbnail {
    /// Zero-based position in enumeration order.
    pub index: usize,
    /// Source file name with `.jpg` removed.
    pub basename: String,
    pub image: RgbaImage,
}

impl Thumbnail {
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// A source file that failed to process and contributes no thumbnail.
#[derive(Debug)]
pub struct Skipped {
    pub file_name: String,
    pub reason: ThumbError,
}

/// Lazily produce one outcome per source entry, in order.
pub fn generate(
    entries: Vec<SourceEntry>,
    config: &MontageConfig,
) -> impl Iterator<Item = Result<Thumbnail, Skipped>> + '_ {
    let template = CaptionTemplate::new(config.text_format.clone());

    entries
        .into_iter()
        .enumerate()
        .map(move |(index, entry)| match process(&entry, index, &template, config) {
            Ok(image) => Ok(Thumbnail {
                index,
                basename: entry.basename,
                image,
            }),
            Err(reason) => Err(Skipped {
                file_name: entry.file_name,
                reason,
            }),
        })
}

fn process(
    entry: &SourceEntry,
    index: usize,
    template: &CaptionTemplate,
    config: &MontageConfig,
) -> Result<RgbaImage, ThumbError> {
    let img = ImageReader::open(&entry.path)?
        .decode()
        .map_err(|e| ThumbError::Decode(entry.path.clone(), e))?;

    let dims = (img.width(), img.height());
    let fit = layout::fit_within(dims, (config.width, config.height));
    let img = if fit != dims {
        img.resize_exact(fit.0, fit.1, FilterType::Lanczos3)
    } else {
        img
    };
    let mut image = img.to_rgba8();

    let text = template.substitute(index, &entry.basename)?;
    // Loaded per file so a missing font skips rather than aborts
    let font = caption::load_font(&config.font)?;
    caption::draw_caption(&mut image, &font, &text);

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan;
    use image::{ImageEncoder, Rgb, RgbImage};
    use std::path::Path;
    use tempfile::TempDir;

    /// Encode a small valid JPEG with the given dimensions.
    fn create_test_jpeg(path: &Path, width: u32, height: u32) {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let file = std::fs::File::create(path).unwrap();
        let writer = std::io::BufWriter::new(file);
        image::codecs::jpeg::JpegEncoder::new(writer)
            .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
            .unwrap();
    }

    fn test_config(tmp: &TempDir) -> MontageConfig {
        MontageConfig {
            dir: tmp.path().to_path_buf(),
            ..MontageConfig::default()
        }
    }

    #[test]
    fn corrupt_file_is_skipped_not_fatal() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("broken.jpg"), b"not a jpeg").unwrap();

        let config = test_config(&tmp);
        let entries = scan::scan(tmp.path()).unwrap();
        let outcomes: Vec<_> = generate(entries, &config).collect();

        assert_eq!(outcomes.len(), 1);
        let skipped = outcomes.into_iter().next().unwrap().unwrap_err();
        assert_eq!(skipped.file_name, "broken.jpg");
        assert!(matches!(skipped.reason, ThumbError::Decode(_, _)));
    }

    #[test]
    fn missing_font_skips_every_file() {
        let tmp = TempDir::new().unwrap();
        create_test_jpeg(&tmp.path().join("a.jpg"), 100, 80);
        create_test_jpeg(&tmp.path().join("b.jpg"), 100, 80);

        let config = MontageConfig {
            font: PathBuf::from("/nonexistent/font.ttf"),
            ..test_config(&tmp)
        };
        let entries = scan::scan(tmp.path()).unwrap();
        let outcomes: Vec<_> = generate(entries, &config).collect();

        assert_eq!(outcomes.len(), 2);
        for outcome in outcomes {
            let skipped = outcome.unwrap_err();
            assert!(matches!(skipped.reason, ThumbError::Caption(_)));
        }
    }

    #[test]
    fn bad_template_key_skips_per_file() {
        let tmp = TempDir::new().unwrap();
        create_test_jpeg(&tmp.path().join("a.jpg"), 100, 80);

        let config = MontageConfig {
            text_format: "$nope".to_string(),
            ..test_config(&tmp)
        };
        let entries = scan::scan(tmp.path()).unwrap();
        let outcomes: Vec<_> = generate(entries, &config).collect();

        assert_eq!(outcomes.len(), 1);
        let skipped = outcomes.into_iter().next().unwrap().unwrap_err();
        assert!(matches!(skipped.reason, ThumbError::Template(_)));
    }

    #[test]
    #[ignore] // Requires a system DejaVuSans font
    fn failures_consume_their_index() {
        // good, broken, good — the second success still carries index 2.
        let tmp = TempDir::new().unwrap();
        create_test_jpeg(&tmp.path().join("a.jpg"), 40, 40);
        std::fs::write(tmp.path().join("b.jpg"), b"junk").unwrap();
        create_test_jpeg(&tmp.path().join("c.jpg"), 40, 40);

        let config = test_config(&tmp);
        let mut entries = scan::scan(tmp.path()).unwrap();
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        let outcomes: Vec<_> = generate(entries, &config).collect();
        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[1].is_err());
        let indices: Vec<usize> = outcomes
            .iter()
            .filter_map(|o| o.as_ref().ok().map(|t| t.index))
            .collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    #[ignore] // Requires a system DejaVuSans font
    fn oversized_image_is_shrunk_within_bounds() {
        let tmp = TempDir::new().unwrap();
        create_test_jpeg(&tmp.path().join("big.jpg"), 1000, 800);

        let config = test_config(&tmp);
        let entries = scan::scan(tmp.path()).unwrap();
        let thumb = generate(entries, &config).next().unwrap().unwrap();

        // (1000, 800) into (500, 400): height binds
        assert_eq!(thumb.dimensions(), (500, 400));
    }

    #[test]
    #[ignore] // Requires a system DejaVuSans font
    fn small_image_keeps_its_dimensions() {
        let tmp = TempDir::new().unwrap();
        create_test_jpeg(&tmp.path().join("small.jpg"), 300, 200);

        let config = test_config(&tmp);
        let entries = scan::scan(tmp.path()).unwrap();
        let thumb = generate(entries, &config).next().unwrap().unwrap();

        assert_eq!(thumb.dimensions(), (300, 200));
        assert_eq!(thumb.basename, "small");
        assert_eq!(thumb.index, 0);
    }

    #[test]
    #[ignore] // Requires a system DejaVuSans font
    fn yields_successes_minus_failures() {
        let tmp = TempDir::new().unwrap();
        for i in 0..4 {
            create_test_jpeg(&tmp.path().join(format!("img{i}.jpg")), 60, 60);
        }
        std::fs::write(tmp.path().join("junk.jpg"), b"junk").unwrap();
        std::fs::write(tmp.path().join("ignored.png"), b"").unwrap();

        let config = test_config(&tmp);
        let entries = scan::scan(tmp.path()).unwrap();
        let (ok, skipped): (Vec<_>, Vec<_>) =
            generate(entries, &config).partition(|o| o.is_ok());

        assert_eq!(ok.len(), 4);
        assert_eq!(skipped.len(), 1);
    }
}
