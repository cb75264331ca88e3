// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and business logic.

pub mod image_kind;

/// Return true for decodable image paths.
pub use image_kind::is_image;
/// Return true for SVG paths.
pub use image_kind::is_svg;
