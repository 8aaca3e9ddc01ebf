//! Freehand path capture.
//!
//! Samples are collected in scene coordinates while a draw gesture is live.
//! On release they are normalized to their bounding box so the stored path
//! does not depend on where it was drawn.

use crate::model::{MIN_ITEM_EXTENT, clamp_extent};
use kurbo::{Point, Rect, Size};

/// Fewer samples than this is a tap, not a stroke.
pub const MIN_PATH_SAMPLES: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct PathCapture {
    samples: Vec<Point>,
}

/// Result of a finished capture: the item box in scene units and the samples
/// relative to its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedPath {
    pub bounds: Rect,
    pub points: Vec<Point>,
}

impl PathCapture {
    /// Start a capture at the pointer-down position.
    pub fn new(start: Point) -> Self {
        Self {
            samples: vec![start],
        }
    }

    pub fn push(&mut self, p: Point) {
        log::trace!("path sample {p:?}");
        self.samples.push(p);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Point] {
        &self.samples
    }

    /// Normalize the captured samples, or `None` if too few were captured.
    pub fn finish(self) -> Option<CapturedPath> {
        if self.samples.len() < MIN_PATH_SAMPLES {
            return None;
        }
        let first = self.samples[0];
        let (min, max) = self.samples.iter().fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        });
        let size = Size::new(
            clamp_extent(max.x - min.x, MIN_ITEM_EXTENT),
            clamp_extent(max.y - min.y, MIN_ITEM_EXTENT),
        );
        let points = self
            .samples
            .iter()
            .map(|p| (*p - min).to_point())
            .collect();
        Some(CapturedPath {
            bounds: Rect::from_origin_size(min, size),
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn two_samples_is_a_tap() {
        let mut cap = PathCapture::new(Point::new(5.0, 5.0));
        cap.push(Point::new(50.0, 50.0));
        assert!(cap.finish().is_none());
    }

    #[test]
    fn points_are_relative_to_box() {
        let mut cap = PathCapture::new(Point::new(110.0, 220.0));
        cap.push(Point::new(150.0, 200.0));
        cap.push(Point::new(190.0, 260.0));
        let path = cap.finish().unwrap();
        assert_eq!(path.bounds, Rect::new(110.0, 200.0, 190.0, 260.0));
        assert_eq!(
            path.points,
            vec![
                Point::new(0.0, 20.0),
                Point::new(40.0, 0.0),
                Point::new(80.0, 60.0)
            ]
        );
    }

    #[test]
    fn flat_stroke_gets_minimum_box() {
        let mut cap = PathCapture::new(Point::new(0.0, 10.0));
        cap.push(Point::new(40.0, 10.0));
        cap.push(Point::new(80.0, 10.0));
        let path = cap.finish().unwrap();
        assert_eq!(path.bounds.size(), Size::new(80.0, 20.0));
        assert_eq!(path.bounds.origin(), Point::new(0.0, 10.0));
    }
}
