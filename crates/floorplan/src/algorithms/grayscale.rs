use image::{GrayImage, Luma};
use crate::{
    error::Result,
    traits::GrayscaleConverter,
    types::{GrayscaleGrid, RasterImage},
};

// ITU-R BT.601 weights in 14-bit fixed point (0.299, 0.587, 0.114).
const R_WEIGHT: u32 = 4899;
const G_WEIGHT: u32 = 9617;
const B_WEIGHT: u32 = 1868;
const SHIFT: u32 = 14;
const ROUND: u32 = 1 << (SHIFT - 1);

/// BT.601 luminance conversion, rounded to nearest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bt601Grayscale;

impl Bt601Grayscale {
    #[inline]
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        let weighted = R_WEIGHT * r as u32 + G_WEIGHT * g as u32 + B_WEIGHT * b as u32;
        ((weighted + ROUND) >> SHIFT) as u8
    }
}

impl GrayscaleConverter for Bt601Grayscale {
    fn to_grayscale(&self, image: &RasterImage) -> Result<GrayscaleGrid> {
        let mut gray = GrayImage::new(image.width(), image.height());
        for (src, dst) in image.pixels().zip(gray.pixels_mut()) {
            let [r, g, b] = src.0;
            *dst = Luma([Self::luma(r, g, b)]);
        }
        Ok(gray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn extremes_map_to_extremes() {
        assert_eq!(Bt601Grayscale::luma(0, 0, 0), 0);
        assert_eq!(Bt601Grayscale::luma(255, 255, 255), 255);
    }

    #[test]
    fn green_dominates_luminance() {
        let red = Bt601Grayscale::luma(255, 0, 0);
        let green = Bt601Grayscale::luma(0, 255, 0);
        let blue = Bt601Grayscale::luma(0, 0, 255);
        assert_eq!((red, green, blue), (76, 150, 29));
    }

    #[test]
    fn converts_every_pixel() {
        let image = RgbImage::from_pixel(3, 2, Rgb([100, 100, 100]));
        let gray = Bt601Grayscale.to_grayscale(&image).unwrap();
        assert_eq!(gray.dimensions(), (3, 2));
        assert!(gray.pixels().all(|p| p.0[0] == 100));
    }
}
