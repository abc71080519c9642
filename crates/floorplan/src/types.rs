use geo::BoundingRect;
use geo_types::{Coord, LineString};
use image::{GrayImage, RgbImage};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Decoded 3-channel, 8-bit raster.
pub type RasterImage = RgbImage;

/// Single-channel luminance grid derived from a [`RasterImage`].
pub type GrayscaleGrid = GrayImage;

/// Binarized grid: wall pixels are 255, background pixels are 0.
pub type BinaryMask = GrayImage;

/// Outer boundary of one connected wall region, in image pixel coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contour {
    pub points: Vec<[i32; 2]>,
}

impl Contour {
    pub fn new(points: Vec<[i32; 2]>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn to_line_string(&self) -> LineString<i32> {
        let coords: Vec<Coord<i32>> = self.points
            .iter()
            .map(|&[x, y]| Coord { x, y })
            .collect();
        LineString::new(coords)
    }

    /// Smallest axis-aligned rectangle covering every boundary pixel.
    ///
    /// Width and height count pixels, so a region spanning columns 1 and 2
    /// has width 2. Returns `None` for an empty contour.
    pub fn bounding_rect(&self) -> Option<WallRect> {
        let rect = self.to_line_string().bounding_rect()?;
        Some(WallRect {
            x: rect.min().x,
            y: rect.min().y,
            width: rect.width() + 1,
            height: rect.height() + 1,
        })
    }
}

/// Axis-aligned bounding box of a detected wall, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct WallRect {
    #[schemars(description = "Left edge in pixels")]
    pub x: i32,
    #[schemars(description = "Top edge in pixels")]
    pub y: i32,
    #[schemars(description = "Width in pixels")]
    pub width: i32,
    #[schemars(description = "Height in pixels")]
    pub height: i32,
}

impl WallRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }
}

/// Walls found in one image, in discovery order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallDetection {
    pub walls: Vec<WallRect>,
    /// Original image dimensions
    pub image_width: u32,
    pub image_height: u32,
}

impl WallDetection {
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Fraction of the image covered by wall bounding boxes (overlaps counted twice).
    pub fn coverage(&self) -> f64 {
        let image_area = self.image_width as f64 * self.image_height as f64;
        if image_area == 0.0 {
            return 0.0;
        }
        let covered: i64 = self.walls.iter().map(WallRect::area).sum();
        covered as f64 / image_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_rect_counts_pixels() {
        let contour = Contour::new(vec![[1, 1], [1, 2], [2, 2], [2, 1]]);
        assert_eq!(contour.bounding_rect(), Some(WallRect::new(1, 1, 2, 2)));
    }

    #[test]
    fn single_pixel_contour_is_kept() {
        let contour = Contour::new(vec![[5, 7]]);
        assert_eq!(contour.bounding_rect(), Some(WallRect::new(5, 7, 1, 1)));
    }

    #[test]
    fn empty_contour_has_no_rect() {
        assert_eq!(Contour::new(Vec::new()).bounding_rect(), None);
    }

    #[test]
    fn coverage_of_full_image() {
        let detection = WallDetection {
            walls: vec![WallRect::new(0, 0, 4, 4)],
            image_width: 4,
            image_height: 4,
        };
        assert!(!detection.is_empty());
        assert!((detection.coverage() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn detection_without_walls() {
        let detection = WallDetection { walls: Vec::new(), image_width: 8, image_height: 8 };
        assert!(detection.is_empty());
        assert_eq!(detection.coverage(), 0.0);
    }
}
