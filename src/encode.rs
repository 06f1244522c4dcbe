//! PNG data-URI encoding of a displacement map.
//!
//! Pure format transform: dx/dy land in the red/green channels
//! remapped from [-1, 1] to [0, 255] (128 = neutral), the specular
//! intensity in blue, alpha fully opaque. The rendering layer reads
//! the URI as a displacement-filter input.

use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder, RgbaImage};
use tracing::debug;

use crate::displacement::{DisplacementMap, DisplacementPixel};
use crate::errors::GlassError;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

fn pack(pixel: &DisplacementPixel) -> [u8; 4] {
    let channel = |v: f32| ((v * 0.5 + 0.5) * 255.0).round() as u8;
    [
        channel(pixel.dx),
        channel(pixel.dy),
        (pixel.intensity.clamp(0.0, 1.0) * 255.0).round() as u8,
        255,
    ]
}

/// Packs the map into raw RGBA8 bytes, row-major.
pub fn pack_rgba(map: &DisplacementMap) -> Vec<u8> {
    let mut raw = Vec::with_capacity(map.pixels().len() * 4);
    for pixel in map.pixels() {
        raw.extend_from_slice(&pack(pixel));
    }
    raw
}

/// Serializes the map as a `data:image/png;base64,` URI.
///
/// An empty map encodes as a single neutral pixel so the consumer
/// always receives a valid, no-op filter input.
pub fn encode_as_image(map: &DisplacementMap) -> Result<String, GlassError> {
    let (width, height, raw) = if map.is_empty() {
        (1, 1, pack(&DisplacementPixel::default()).to_vec())
    } else {
        (map.width(), map.height(), pack_rgba(map))
    };

    // RgbaImage::from_raw only fails on a length mismatch, which the
    // packing above rules out.
    let img = RgbaImage::from_raw(width, height, raw)
        .ok_or_else(|| image::ImageError::Parameter(image::error::ParameterError::from_kind(
            image::error::ParameterErrorKind::DimensionMismatch,
        )))?;

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        img.as_raw(),
        width,
        height,
        ExtendedColorType::Rgba8,
    )?;

    debug!(width, height, bytes = png.len(), "encoded displacement map");
    Ok(format!("{DATA_URI_PREFIX}{}", BASE64_STANDARD.encode(&png)))
}
