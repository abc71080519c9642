use image::GrayImage;
use crate::{
    error::Result,
    types::{BinaryMask, Contour, GrayscaleGrid, RasterImage, WallRect},
};

/// Trait for colour-to-luminance conversion
pub trait GrayscaleConverter: Send + Sync {
    fn to_grayscale(&self, image: &RasterImage) -> Result<GrayscaleGrid>;
}

/// Trait for image preprocessing algorithms
pub trait ImagePreprocessor: Send + Sync {
    /// Preprocess the input image (e.g., threshold)
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage>;
}

/// Trait for contour extraction algorithms
pub trait ContourExtractor: Send + Sync {
    /// Extract contours from a binary mask, in discovery order
    fn extract_contours(&self, mask: &BinaryMask) -> Result<Vec<Contour>>;
}

/// Trait for contour simplification algorithms
pub trait ContourSimplifier: Send + Sync {
    /// Simplify the contours in place by reducing point count
    fn simplify(&self, contours: &mut [Contour]) -> Result<()>;
}

/// Main trait for wall extraction
pub trait WallExtractor: Send + Sync {
    /// Extract wall bounding boxes from a decoded raster
    fn extract(&self, image: &RasterImage) -> Result<Vec<WallRect>>;
}
