// SPDX-License-Identifier: MPL-2.0
//! Image decoding for raster formats (PNG, JPEG, GIF, WebP, etc.) and SVG.

use crate::error::AssetError;
use iced::widget::{image, svg};
use image_rs::GenericImageView;
use resvg::usvg;

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub enum ImageData {
    Raster {
        handle: image::Handle,
        width: u32,
        height: u32,
    },
    /// SVGs are kept as vectors and rendered by the widget.
    Vector {
        handle: svg::Handle,
        width: u32,
        height: u32,
    },
}

impl ImageData {
    pub fn width(&self) -> u32 {
        match self {
            ImageData::Raster { width, .. } | ImageData::Vector { width, .. } => *width,
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            ImageData::Raster { height, .. } | ImageData::Vector { height, .. } => *height,
        }
    }

    /// Width over height, `1.0` for degenerate sizes.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height() == 0 {
            1.0
        } else {
            self.width() as f32 / self.height() as f32
        }
    }
}

/// Returns true if `bytes` look like an SVG document.
///
/// `hint` is a file name, URL, or content type that may already tell.
pub fn is_svg(bytes: &[u8], hint: Option<&str>) -> bool {
    if let Some(hint) = hint {
        let hint = hint.to_ascii_lowercase();
        if hint.contains("image/svg") || hint.ends_with(".svg") {
            return true;
        }
    }
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

/// Decodes encoded image bytes.
///
/// # Errors
///
/// Returns [`AssetError::Decode`] if the data is neither a supported raster
/// format nor a valid SVG with non-zero size.
pub fn decode(bytes: Vec<u8>, hint: Option<&str>) -> Result<ImageData, AssetError> {
    if is_svg(&bytes, hint) {
        let tree = usvg::Tree::from_data(&bytes, &usvg::Options::default())
            .map_err(|e| AssetError::Decode(e.to_string()))?;
        let size = tree.size().to_int_size();
        if size.width() == 0 || size.height() == 0 {
            return Err(AssetError::Decode("SVG has empty dimensions".into()));
        }
        return Ok(ImageData::Vector {
            handle: svg::Handle::from_memory(bytes),
            width: size.width(),
            height: size.height(),
        });
    }

    let img = image_rs::load_from_memory(&bytes)?;
    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();

    Ok(ImageData::Raster {
        handle: image::Handle::from_rgba(width, height, pixels),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buffer = Cursor::new(Vec::new());
        image
            .write_to(&mut buffer, ImageFormat::Png)
            .expect("failed to encode png");
        buffer.into_inner()
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let data = decode(png_bytes(4, 2), Some("sample.png")).expect("png should decode");
        assert!(matches!(data, ImageData::Raster { .. }));
        assert_eq!(data.width(), 4);
        assert_eq!(data.height(), 2);
        assert!((data.aspect_ratio() - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn decode_svg_keeps_vector() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3">
                <rect width="6" height="3" fill="blue" />
            </svg>"#;
        let data = decode(svg.as_bytes().to_vec(), None).expect("svg should decode");
        assert!(matches!(data, ImageData::Vector { .. }));
        assert_eq!(data.width(), 6);
        assert_eq!(data.height(), 3);
    }

    #[test]
    fn decode_invalid_bytes_is_decode_error() {
        match decode(b"not an image".to_vec(), Some("broken.png")) {
            Err(AssetError::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn decode_broken_svg_is_decode_error() {
        match decode(b"<svg>oops".to_vec(), Some("image/svg+xml")) {
            Err(AssetError::Decode(_)) => {}
            other => panic!("expected Decode error, got {other:?}"),
        }
    }

    #[test]
    fn svg_detection_uses_hint_and_content() {
        assert!(is_svg(b"", Some("image/svg+xml; charset=utf-8")));
        assert!(is_svg(b"", Some("/img/logo.SVG")));
        assert!(is_svg(b"  <svg xmlns='x'/>", None));
        assert!(is_svg(b"<?xml version='1.0'?><svg/>", None));
        assert!(!is_svg(&png_bytes(1, 1), Some("image/png")));
    }
}
