use crate::{error::Result, traits::ContourSimplifier, types::Contour};

/// Drops boundary points that sit in the middle of a straight horizontal,
/// vertical or diagonal run, keeping only the run end points.
///
/// Contours are treated as closed rings. The bounding box of a contour is
/// unchanged by this pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainCompressionSimplifier;

impl ChainCompressionSimplifier {
    pub fn compress(points: &[[i32; 2]]) -> Vec<[i32; 2]> {
        let n = points.len();
        if n < 3 {
            return points.to_vec();
        }

        let step = |from: [i32; 2], to: [i32; 2]| [to[0] - from[0], to[1] - from[1]];

        let compressed: Vec<[i32; 2]> = (0..n)
            .filter(|&i| {
                let prev = points[(i + n - 1) % n];
                let curr = points[i];
                let next = points[(i + 1) % n];
                step(prev, curr) != step(curr, next)
            })
            .map(|i| points[i])
            .collect();

        if compressed.is_empty() {
            points.to_vec()
        } else {
            compressed
        }
    }
}

impl ContourSimplifier for ChainCompressionSimplifier {
    fn simplify(&self, contours: &mut [Contour]) -> Result<()> {
        for contour in contours {
            contour.points = Self::compress(&contour.points);
        }
        Ok(())
    }
}

/// Keeps every traced boundary point.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSimplification;

impl ContourSimplifier for NoSimplification {
    fn simplify(&self, _contours: &mut [Contour]) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_ring_keeps_corners() {
        let ring = vec![
            [0, 0], [0, 1], [0, 2], [1, 2], [2, 2], [2, 1], [2, 0], [1, 0],
        ];
        let compressed = ChainCompressionSimplifier::compress(&ring);
        assert_eq!(compressed, vec![[0, 0], [0, 2], [2, 2], [2, 0]]);
    }

    #[test]
    fn short_contours_are_untouched() {
        let dot = vec![[3, 3]];
        assert_eq!(ChainCompressionSimplifier::compress(&dot), dot);
        let pair = vec![[3, 3], [4, 4]];
        assert_eq!(ChainCompressionSimplifier::compress(&pair), pair);
    }

    #[test]
    fn line_there_and_back_keeps_ends() {
        // One-pixel-thick horizontal line traced out and back.
        let trace = vec![[0, 0], [1, 0], [2, 0], [3, 0], [2, 0], [1, 0]];
        let compressed = ChainCompressionSimplifier::compress(&trace);
        assert_eq!(compressed, vec![[0, 0], [3, 0]]);
    }

    #[test]
    fn bounding_box_is_preserved() {
        let ring = vec![
            [1, 1], [1, 2], [1, 3], [2, 4], [3, 4], [4, 3], [4, 2], [3, 1], [2, 1],
        ];
        let mut contours = vec![Contour::new(ring.clone())];
        ChainCompressionSimplifier.simplify(&mut contours).unwrap();
        assert!(contours[0].len() < ring.len());
        assert_eq!(contours[0].bounding_rect(), Contour::new(ring).bounding_rect());
    }
}
