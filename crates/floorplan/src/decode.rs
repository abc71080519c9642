//! Turning encoded payloads into rasters.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use crate::{error::DecodeError, types::RasterImage};

/// Decode an encoded image (PNG, JPEG, TIFF, BMP) into an RGB raster.
///
/// A decode that yields zero width or height is reported as
/// [`DecodeError::EmptyImage`] rather than handed on.
pub fn decode_image(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let raster = image::load_from_memory(bytes)?.to_rgb8();

    let (width, height) = raster.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    Ok(raster)
}

/// Decode a standard-alphabet base64 string, then the image it carries.
pub fn decode_base64_image(encoded: &str) -> Result<RasterImage, DecodeError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    decode_image(&bytes)
}

/// Encode raw image bytes the way clients submit them.
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
