use image::GrayImage;
use imageproc::contours::BorderType;
use crate::{
    error::Result,
    traits::ContourExtractor,
    types::{BinaryMask, Contour},
};

/// Imageproc-based extractor that keeps only the outermost boundary of each
/// connected wall region.
///
/// Regions nested inside a hole of another region are skipped, as are the
/// hole borders themselves. The mask is padded with one background pixel on
/// every side before tracing so that regions touching the image frame are
/// followed like any other region.
#[derive(Debug, Clone, Default)]
pub struct ExternalContourExtractor;

impl ContourExtractor for ExternalContourExtractor {
    fn extract_contours(&self, mask: &BinaryMask) -> Result<Vec<Contour>> {
        let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
        image::imageops::replace(&mut padded, mask, 1, 1);

        let contours = imageproc::contours::find_contours::<i32>(&padded);

        let result = contours
            .into_iter()
            .filter(|contour| contour.border_type == BorderType::Outer && contour.parent.is_none())
            .map(|contour| {
                let points = contour.points
                    .iter()
                    .map(|p| [p.x - 1, p.y - 1])
                    .collect();
                Contour::new(points)
            })
            .collect();

        Ok(result)
    }
}
