// SPDX-License-Identifier: MPL-2.0
//! Image loading and decoding for the comparison pair.

use crate::app::config::ASPECT_RATIO_TOLERANCE;
use crate::error::Result;
use iced::widget::image;
use iced::Size;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Pixel dimensions as a float size for layout computations.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Width over height, or `None` for an empty image.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f32> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(self.width as f32 / self.height as f32)
    }
}

/// Load an image from the given path and decode it to RGBA.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] if the file cannot be read and
/// [`crate::error::Error::Decode`] if its content is not a supported image.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let decoded = image_rs::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    tracing::debug!(path = %path.display(), width, height, "decoded image");
    Ok(ImageData::from_rgba(width, height, rgba.into_raw()))
}

/// Whether two images share an aspect ratio within [`ASPECT_RATIO_TOLERANCE`].
///
/// Empty images never match.
#[must_use]
pub fn aspect_ratios_match(a: &ImageData, b: &ImageData) -> bool {
    match (a.aspect_ratio(), b.aspect_ratio()) {
        (Some(ra), Some(rb)) => ((ra - rb) / ra).abs() <= ASPECT_RATIO_TOLERANCE,
        _ => false,
    }
}
