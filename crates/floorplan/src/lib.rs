//! # Floor Plan Wall Extraction Library
//!
//! Detects dark wall regions in top-down floor-plan images and reports each
//! one as an axis-aligned bounding rectangle.
//!
//! The pipeline is a single synchronous pass:
//!
//! 1. decode the payload into an RGB raster ([`decode`])
//! 2. convert to BT.601 luminance
//! 3. inverted threshold at [`WALL_THRESHOLD`] (dark pixels are walls)
//! 4. trace the external contour of every connected wall region
//! 5. compress straight contour runs and take each contour's bounding box
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! let bytes = std::fs::read("plan.png")?;
//! let response = floorplan::analyze_bytes(&bytes)?;
//! println!("{}", response.to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Pipeline
//!
//! ```rust,no_run
//! use floorplan::{Pipeline, algorithms::*};
//!
//! let pipeline = Pipeline::builder()
//!     .add_preprocessor(InverseThresholdPreprocessor { threshold: 80 })
//!     .without_simplification()
//!     .build();
//! # let _ = pipeline;
//! ```

// Core modules
pub mod error;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod pipeline;
pub mod decode;
pub mod response;
pub mod server;

// Re-exports for convenience
pub use error::{DecodeError, FloorplanError, Result};
pub use types::{BinaryMask, Contour, GrayscaleGrid, RasterImage, WallDetection, WallRect};
pub use traits::*;
pub use algorithms::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder};
pub use decode::{decode_base64_image, decode_image, encode_base64};
pub use response::WallsResponse;

/// Decode an encoded image payload into a raster.
pub fn decode(bytes: &[u8]) -> Result<RasterImage> {
    Ok(decode_image(bytes)?)
}

/// Extract wall rectangles from a decoded raster with the default pipeline.
pub fn extract(image: &RasterImage) -> Result<Vec<WallRect>> {
    Pipeline::default().extract(image)
}

/// Decode, extract and assemble in one call.
pub fn analyze_bytes(bytes: &[u8]) -> Result<WallsResponse> {
    analyze_raster(&decode(bytes)?)
}

/// Same as [`analyze_bytes`] for a base64-encoded payload.
pub fn analyze_base64(encoded: &str) -> Result<WallsResponse> {
    analyze_raster(&decode_base64_image(encoded)?)
}

fn analyze_raster(image: &RasterImage) -> Result<WallsResponse> {
    let detection = Pipeline::default().process(image)?;
    if detection.is_empty() {
        tracing::debug!(threshold = WALL_THRESHOLD, "No pixels darker than the wall threshold");
    }
    tracing::info!(
        width = detection.image_width,
        height = detection.image_height,
        walls = detection.walls.len(),
        coverage = detection.coverage(),
        "Analyzed floor plan"
    );
    Ok(detection.into())
}
