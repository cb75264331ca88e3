// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Worker-side decoding for preloaded images.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use egui_extras::image::load_svg_bytes_with_size;
use resvg::usvg::Options;

use crate::utils::is_svg;

/// Largest edge of a cached preview.
pub const MAX_EDGE: u32 = 256;

/// Decode an image source into pixels fitted within [`MAX_EDGE`], preserving aspect ratio.
///
/// # Errors
///
/// Returns an error when the file cannot be read or is not a decodable image.
pub fn decode_image(path: &Path) -> Result<egui::ColorImage> {
    if is_svg(path) {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read image: {}", path.display()))?;
        let hint = egui::SizeHint::Size {
            width: MAX_EDGE,
            height: MAX_EDGE,
            maintain_aspect_ratio: true,
        };
        return load_svg_bytes_with_size(&bytes, hint, &Options::default())
            .map_err(|e| anyhow!("Failed to rasterize {}: {e}", path.display()));
    }

    let dyn_img = image::open(path)
        .with_context(|| format!("Failed to decode image: {}", path.display()))?;
    let resized = dyn_img.thumbnail(MAX_EDGE, MAX_EDGE).to_rgba8();
    let size = [resized.width() as usize, resized.height() as usize];
    let pixels = resized.into_raw();
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, &pixels))
}
