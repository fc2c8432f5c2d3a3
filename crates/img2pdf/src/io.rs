//! Image file I/O
//!
//! Reads raw image bytes only; decoding happens inside the PDF library when
//! the document is built.

use crate::types::*;
use std::path::Path;

/// Load a single image file
pub async fn load_image(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    Ok(bytes)
}

/// Load multiple image files, preserving order
pub async fn load_images(paths: &[impl AsRef<Path>]) -> Result<Vec<Vec<u8>>> {
    let mut images = Vec::new();
    for path in paths {
        images.push(load_image(path).await?);
    }
    Ok(images)
}
