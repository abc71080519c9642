use crate::{
    pipeline::Pipeline,
    traits::{ContourExtractor, ContourSimplifier, GrayscaleConverter, ImagePreprocessor},
    algorithms::{
        Bt601Grayscale,
        ChainCompressionSimplifier,
        ExternalContourExtractor,
        InverseThresholdPreprocessor,
        NoSimplification,
        WALL_THRESHOLD,
    },
};

/// Builder for creating processing pipelines with a fluent API
pub struct PipelineBuilder {
    grayscale: Option<Box<dyn GrayscaleConverter>>,
    preprocessors: Vec<Box<dyn ImagePreprocessor>>,
    contour_extractor: Option<Box<dyn ContourExtractor>>,
    simplifier: Option<Box<dyn ContourSimplifier>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            grayscale: None,
            preprocessors: Vec::new(),
            contour_extractor: None,
            simplifier: None,
        }
    }

    /// Set the grayscale converter (replaces any existing one)
    pub fn set_grayscale<G>(mut self, converter: G) -> Self
    where
        G: GrayscaleConverter + 'static,
    {
        self.grayscale = Some(Box::new(converter));
        self
    }

    /// Add a preprocessor to the pipeline
    pub fn add_preprocessor<P>(mut self, preprocessor: P) -> Self
    where
        P: ImagePreprocessor + 'static,
    {
        self.preprocessors.push(Box::new(preprocessor));
        self
    }

    /// Set the contour extractor (replaces any existing one)
    pub fn set_contour_extractor<E>(mut self, extractor: E) -> Self
    where
        E: ContourExtractor + 'static,
    {
        self.contour_extractor = Some(Box::new(extractor));
        self
    }

    /// Set the contour simplifier (replaces any existing one)
    pub fn set_simplifier<S>(mut self, simplifier: S) -> Self
    where
        S: ContourSimplifier + 'static,
    {
        self.simplifier = Some(Box::new(simplifier));
        self
    }

    /// Keep every traced boundary point
    pub fn without_simplification(self) -> Self {
        self.set_simplifier(NoSimplification)
    }

    /// Build the pipeline with default components if not specified.
    ///
    /// Without any preprocessor the grayscale grid would be traced as is, so
    /// an empty preprocessor list falls back to the wall threshold.
    pub fn build(self) -> Pipeline {
        let mut preprocessors = self.preprocessors;
        if preprocessors.is_empty() {
            preprocessors.push(Box::new(InverseThresholdPreprocessor::default()));
        }

        let grayscale = self.grayscale
            .unwrap_or_else(|| Box::new(Bt601Grayscale));

        let contour_extractor = self.contour_extractor
            .unwrap_or_else(|| Box::new(ExternalContourExtractor));

        let simplifier = self.simplifier
            .unwrap_or_else(|| Box::new(ChainCompressionSimplifier));

        Pipeline::new(
            grayscale,
            preprocessors,
            contour_extractor,
            simplifier,
        )
    }

    /// The wall detector used by the service: fixed inverted threshold at 50
    pub fn build_default() -> Pipeline {
        Self::new()
            .add_preprocessor(InverseThresholdPreprocessor { threshold: WALL_THRESHOLD })
            .build()
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
