use image::GrayImage;
use crate::{algorithms::WALL_THRESHOLD, error::Result, traits::ImagePreprocessor};

/// Inverted binary threshold: pixels darker than `threshold` become 255
/// (wall), everything else becomes 0.
#[derive(Debug, Clone)]
pub struct InverseThresholdPreprocessor {
    pub threshold: u8,
}

impl Default for InverseThresholdPreprocessor {
    fn default() -> Self {
        Self { threshold: WALL_THRESHOLD }
    }
}

impl ImagePreprocessor for InverseThresholdPreprocessor {
    fn preprocess(&self, image: &GrayImage) -> Result<GrayImage> {
        // Nothing is strictly below zero.
        let Some(cutoff) = self.threshold.checked_sub(1) else {
            return Ok(GrayImage::new(image.width(), image.height()));
        };
        let mut mask = imageproc::contrast::threshold(image, cutoff);
        image::imageops::invert(&mut mask);
        Ok(mask)
    }
}
