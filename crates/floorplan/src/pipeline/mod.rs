pub mod builder;

use crate::{
    error::{FloorplanError, Result},
    types::{RasterImage, WallDetection, WallRect},
    traits::{ContourExtractor, ContourSimplifier, GrayscaleConverter, ImagePreprocessor, WallExtractor},
};

/// Wall extraction pipeline: grayscale, binarize, trace, simplify, bound.
pub struct Pipeline {
    grayscale: Box<dyn GrayscaleConverter>,
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    contour_extractor: Box<dyn ContourExtractor>,
    simplifier: Box<dyn ContourSimplifier>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    /// Create a new pipeline with the given components
    pub fn new(
        grayscale: Box<dyn GrayscaleConverter>,
        preprocessors: Vec<Box<dyn ImagePreprocessor>>,
        contour_extractor: Box<dyn ContourExtractor>,
        simplifier: Box<dyn ContourSimplifier>,
    ) -> Self {
        Self {
            grayscale,
            preprocessors,
            contour_extractor,
            simplifier,
        }
    }

    /// Process a decoded raster through the entire pipeline
    pub fn process(&self, image: &RasterImage) -> Result<WallDetection> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(FloorplanError::InvalidImage { width, height });
        }

        // Step 1: Luminance
        let mut processed = self.grayscale.to_grayscale(image)?;

        // Step 2: Apply all preprocessors in sequence (binarization)
        for preprocessor in &self.preprocessors {
            processed = preprocessor.preprocess(&processed)?;
        }

        // Step 3: Trace region boundaries
        let mut contours = self.contour_extractor.extract_contours(&processed)?;

        // Step 4: Compress straight runs
        self.simplifier.simplify(&mut contours)?;

        // Step 5: One rectangle per contour, discovery order preserved
        let walls = contours
            .iter()
            .map(|contour| {
                contour.bounding_rect().ok_or_else(|| {
                    FloorplanError::ImageProcessing("contour without points".to_string())
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            width,
            height,
            contours = contours.len(),
            points = contours.iter().map(|c| c.len()).sum::<usize>(),
            "Extracted wall contours"
        );

        Ok(WallDetection {
            walls,
            image_width: width,
            image_height: height,
        })
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!(
            "Pipeline: 1 grayscale converter, {} preprocessors, 1 contour extractor, 1 simplifier",
            self.preprocessors.len(),
        )
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        builder::PipelineBuilder::build_default()
    }
}

impl WallExtractor for Pipeline {
    fn extract(&self, image: &RasterImage) -> Result<Vec<WallRect>> {
        Ok(self.process(image)?.walls)
    }
}
