// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Classify image sources by extension before handing them to a decoder.

use std::path::Path;

/// MIME essence guessed from the path extension (`application/octet-stream` when unknown).
pub fn guess_mime(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Return true when the path looks like an image we can decode.
pub fn is_image(path: &Path) -> bool {
    guess_mime(path).starts_with("image/") || is_svg(path)
}

/// Return true when the path extension is SVG.
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_common_image_extensions() {
        assert!(is_image(Path::new("photo.PNG")));
        assert!(is_image(Path::new("images/banner.jpg")));
        assert!(is_image(Path::new("logo.svg")));
        assert!(!is_image(Path::new("notes.txt")));
        assert!(!is_image(Path::new("no_extension")));
    }

    #[test]
    fn svg_check_is_case_insensitive() {
        assert!(is_svg(Path::new("ICON.SVG")));
        assert!(!is_svg(Path::new("icon.png")));
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(guess_mime(Path::new("blob.zzz")), "application/octet-stream");
        assert_eq!(guess_mime(Path::new("a.png")), "image/png");
    }
}
