// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Pagepress contributors
//
// JPEG decode and re-encode primitives used by both stages, built on
// the `image` crate.

use std::path::Path;

use image::DynamicImage;
use image::codecs::jpeg::JpegEncoder;
use tracing::debug;

use pagepress_core::error::{PagepressError, Result};
use pagepress_core::types::CompressionLevel;

/// Decodes an image file into memory.
pub fn decode_file(path: &Path) -> Result<DynamicImage> {
    let image = image::open(path).map_err(|err| PagepressError::Decode {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })?;
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );
    Ok(image)
}

/// Decodes an image from raw bytes, attributing failures to `origin`.
pub fn decode_bytes(data: &[u8], origin: &Path) -> Result<DynamicImage> {
    image::load_from_memory(data).map_err(|err| PagepressError::Decode {
        path: origin.to_path_buf(),
        detail: err.to_string(),
    })
}

/// Re-encodes an image as a baseline JPEG at the requested level.
///
/// The pixel data is flattened to RGB first so the output is uniform
/// regardless of the source color type.
pub fn encode_jpeg(
    image: &DynamicImage,
    level: CompressionLevel,
    target: &Path,
) -> Result<Vec<u8>> {
    let rgb = image.to_rgb8();
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, level.jpeg_quality());
    rgb.write_with_encoder(encoder)
        .map_err(|err| PagepressError::Encode {
            path: target.to_path_buf(),
            detail: err.to_string(),
        })?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let buffer = RgbImage::from_fn(width, height, |x, y| {
            image::Rgb([(x * 4) as u8, (y * 4) as u8, ((x + y) * 2) as u8])
        });
        DynamicImage::ImageRgb8(buffer)
    }

    /// Encoded output carries the JPEG start and end markers.
    #[test]
    fn encode_produces_jpeg_markers() {
        let bytes = encode_jpeg(
            &gradient(32, 32),
            CompressionLevel::default(),
            Path::new("t.jpg"),
        )
        .unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        assert_eq!(&bytes[bytes.len() - 2..], &[0xFF, 0xD9]);
    }

    /// A heavier level never produces a larger file than a lighter one.
    #[test]
    fn higher_level_never_larger() {
        let image = gradient(64, 64);
        let mild = encode_jpeg(
            &image,
            CompressionLevel::new(10).unwrap(),
            Path::new("t.jpg"),
        )
        .unwrap();
        let heavy = encode_jpeg(
            &image,
            CompressionLevel::new(90).unwrap(),
            Path::new("t.jpg"),
        )
        .unwrap();
        assert!(heavy.len() <= mild.len());
    }

    /// Re-encoding the same input twice yields identical bytes.
    #[test]
    fn encode_is_deterministic() {
        let image = gradient(48, 16);
        let level = CompressionLevel::default();
        let first = encode_jpeg(&image, level, Path::new("t.jpg")).unwrap();
        let second = encode_jpeg(&image, level, Path::new("t.jpg")).unwrap();
        assert_eq!(first, second);
    }

    /// Encoded output decodes back with the original dimensions.
    #[test]
    fn encoded_bytes_decode_with_same_dimensions() {
        let bytes = encode_jpeg(
            &gradient(20, 10),
            CompressionLevel::default(),
            Path::new("t.jpg"),
        )
        .unwrap();
        let decoded = decode_bytes(&bytes, Path::new("t.jpg")).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (20, 10));
    }

    /// Bytes that are not an image fail with a decode error.
    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode_bytes(b"not an image", Path::new("junk.bin")).unwrap_err();
        assert!(matches!(err, PagepressError::Decode { .. }));
    }
}
