//! Padding compositor.
//!
//! The single transform this tool performs: resize the source logo to fit
//! inside a uniform inset, composite it onto an opaque white canvas using
//! its own alpha channel, and flatten to 3-channel RGB. Pure over its
//! inputs and byte-deterministic, so every catalog entry can reuse one
//! decoded source.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage, RgbaImage};

use crate::error::{IconError, Result};

/// The decoded source logo.
///
/// Decoded once to RGBA8 regardless of the input mode, then shared
/// read-only across every catalog entry.
#[derive(Debug)]
pub struct SourceAsset {
    image: RgbaImage,
}

impl SourceAsset {
    /// Load and decode a source image from disk.
    ///
    /// A missing file is the one fatal condition of a batch run, so it
    /// gets its own error variant rather than a generic IO error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IconError::SourceNotFound {
                path: path.to_path_buf(),
                help: Some("pass --source to point at the logo image".to_string()),
            });
        }

        let image = image::open(path)
            .map_err(|e| IconError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to decode source image: {}", e),
            })?
            .to_rgba8();

        Ok(Self { image })
    }

    /// Wrap an already-decoded image (used by tests and benchmarks).
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Inset in pixels for a given edge length and padding percentage.
///
/// `floor(size * padding / 100)`, applied identically to both axes.
pub fn inset_for(size: u32, padding_percent: f64) -> u32 {
    (size as f64 * padding_percent / 100.0).floor() as u32
}

/// Compose a padded, flattened icon from the source logo.
///
/// The logo is resized to `size - 2*inset` square with Lanczos filtering
/// (non-square sources are stretched, not aspect-fit) and alpha-blended
/// onto white at offset `(inset, inset)`. Fails with `InvalidDimension`
/// when the inset leaves no room for the logo.
pub fn compose(source: &SourceAsset, size: u32, padding_percent: f64) -> Result<RgbImage> {
    let inset = inset_for(size, padding_percent);
    let inner = size as i64 - 2 * inset as i64;
    if inner <= 0 {
        return Err(IconError::InvalidDimension {
            size,
            padding: padding_percent,
        });
    }
    let inner = inner as u32;

    let logo = imageops::resize(&source.image, inner, inner, FilterType::Lanczos3);

    let mut canvas = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));

    for (x, y, pixel) in logo.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let a = a as u32;
        let dst = canvas.get_pixel_mut(x + inset, y + inset);
        for (out, src) in dst.0.iter_mut().zip([r, g, b]) {
            // Blend over opaque white; the result has no alpha to keep.
            *out = ((src as u32 * a + 255 * (255 - a)) / 255) as u8;
        }
    }

    Ok(canvas)
}
