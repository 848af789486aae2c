// SPDX-License-Identifier: MPL-2.0
//! Media handling for the before/after pair.
//!
//! Images are decoded on a blocking worker and handed back to the UI as
//! [`LoadedImage`] values that pair the pixel data with its source path.

pub mod image;

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use extensions::IMAGE_EXTENSIONS;
pub use image::{aspect_ratios_match, load_image, ImageData};

pub mod extensions {
    /// Image file extensions accepted by the open dialogs.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
    ];
}

/// A decoded image together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub data: ImageData,
}

impl LoadedImage {
    /// File name for titles and status lines, falling back to the full path.
    #[must_use]
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }
}

/// File name of `path` for display, falling back to the full path.
#[must_use]
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(String::from)
        .unwrap_or_else(|| path.display().to_string())
}

/// Decodes `path` on the blocking thread pool.
///
/// # Errors
///
/// Propagates [`load_image`] errors; a panicked worker is reported as a
/// decode error.
pub async fn load_image_async(path: PathBuf) -> Result<LoadedImage> {
    tokio::task::spawn_blocking(move || {
        let data = load_image(&path)?;
        Ok(LoadedImage { path, data })
    })
    .await
    .map_err(|e| Error::Decode(e.to_string()))?
}
