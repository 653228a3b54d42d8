use clap::Parser;
use image::DynamicImage;
use image::RgbaImage;
use montage::{config::MontageConfig, layout, output, pack, scan, thumbs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "montage")]
#[command(about = "Tile a directory of images into a single captioned grid image")]
#[command(long_about = "\
Tile a directory of images into a single captioned grid image

Every .jpg file in DIR (non-recursive) is resized to fit within the
--width/--height bounds, annotated with a caption, and packed into a grid
of --columns thumbnails per row. Files that fail to decode are skipped
with a notice on stderr; the run only fails if nothing could be processed.

The caption template substitutes two placeholders:
  $index      zero-based position in directory order
  $basename   file name with .jpg removed

The output format is inferred from OUT's extension. The montage canvas is
transparent outside the thumbnails, so prefer an alpha-capable format
such as .png.")]
#[command(version)]
struct Cli {
    /// Thumbnails per row
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
    columns: u32,

    /// Pixel gap between thumbnails and between rows
    #[arg(long, default_value_t = 3)]
    margin: u32,

    /// Thumbnail height bound (scale down only)
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Thumbnail width bound (scale down only)
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Caption font file
    #[arg(long, default_value = montage::config::DEFAULT_FONT)]
    font: PathBuf,

    /// Caption template ($index, $basename)
    #[arg(long, default_value = "[$index] $basename")]
    text_format: String,

    /// Reorder thumbnails by height to tighten packing
    #[arg(long)]
    fit: bool,

    /// Read images from this directory
    dir: PathBuf,

    /// Output file path
    out: PathBuf,
}

impl Cli {
    fn into_config(self) -> MontageConfig {
        MontageConfig {
            columns: self.columns,
            margin: self.margin,
            height: self.height,
            width: self.width,
            font: self.font,
            text_format: self.text_format,
            fit: self.fit,
            dir: self.dir,
            out: self.out,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config();

    let entries = scan::scan(&config.dir)?;

    let mut thumbnails = Vec::new();
    for outcome in thumbs::generate(entries, &config) {
        match outcome {
            Ok(thumb) => {
                output::print_progress(thumb.index, &thumb.basename);
                thumbnails.push(thumb);
            }
            Err(skipped) => output::eprint_skip(&skipped.file_name, &skipped.reason),
        }
    }

    if config.fit {
        layout::fit_sort(&mut thumbnails, |t| t.dimensions());
    }

    let images: Vec<RgbaImage> = thumbnails.into_iter().map(|t| t.image).collect();
    let montage = pack::pack(&images, config.columns, config.margin)?;

    DynamicImage::ImageRgba8(montage).save(&config.out)?;
    Ok(())
}
