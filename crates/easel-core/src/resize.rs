//! Corner-handle resize math.
//!
//! Images keep their aspect ratio and are driven by horizontal pointer
//! motion only; every other kind resizes each axis independently. The
//! opposite corner stays anchored and no axis ever inverts: a handle dragged
//! past the far side stops at the minimum extent.

use crate::model::{ItemKind, MIN_IMAGE_EXTENT, MIN_ITEM_EXTENT, clamp_extent};
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    Nw,
    Ne,
    Sw,
    Se,
}

impl Handle {
    pub const ALL: [Handle; 4] = [Handle::Nw, Handle::Ne, Handle::Sw, Handle::Se];

    pub fn is_east(self) -> bool {
        matches!(self, Handle::Ne | Handle::Se)
    }

    pub fn is_north(self) -> bool {
        matches!(self, Handle::Nw | Handle::Ne)
    }

    /// Position of this handle on `bounds`.
    pub fn corner(self, bounds: Rect) -> Point {
        let x = if self.is_east() { bounds.x1 } else { bounds.x0 };
        let y = if self.is_north() { bounds.y0 } else { bounds.y1 };
        Point::new(x, y)
    }
}

/// New bounds for an item of `kind` whose `start` bounds are being dragged by
/// `handle`. `delta_screen` is the pointer displacement since the gesture
/// began, in screen pixels; `zoom` is the viewport percentage.
pub fn resize(kind: &ItemKind, handle: Handle, start: Rect, delta_screen: Vec2, zoom: f64) -> Rect {
    let delta = delta_screen / (zoom / 100.0);
    if kind.is_aspect_locked() {
        resize_locked(handle, start, delta)
    } else {
        resize_free(handle, start, delta)
    }
}

fn resize_locked(handle: Handle, start: Rect, delta: Vec2) -> Rect {
    let (w0, h0) = (start.width(), start.height());
    let ratio = w0 / h0;
    // Floor the width so the derived height also respects the image minimum.
    let min_w = if ratio.is_finite() && ratio > 0.0 {
        MIN_IMAGE_EXTENT.max(MIN_IMAGE_EXTENT * ratio)
    } else {
        MIN_IMAGE_EXTENT
    };

    let raw_w = if handle.is_east() { w0 + delta.x } else { w0 - delta.x };
    let w = clamp_extent(raw_w, min_w);
    let h = if ratio.is_finite() && ratio > 0.0 {
        w / ratio
    } else {
        h0
    };

    let x = if handle.is_east() { start.x0 } else { start.x0 + (w0 - w) };
    let y = if handle.is_north() { start.y0 + (h0 - h) } else { start.y0 };
    Rect::new(x, y, x + w, y + h)
}

fn resize_free(handle: Handle, start: Rect, delta: Vec2) -> Rect {
    let (w0, h0) = (start.width(), start.height());

    let (x, w) = if handle.is_east() {
        (start.x0, clamp_extent(w0 + delta.x, MIN_ITEM_EXTENT))
    } else {
        let w = clamp_extent(w0 - delta.x, MIN_ITEM_EXTENT);
        (start.x0 + (w0 - w), w)
    };
    let (y, h) = if handle.is_north() {
        let h = clamp_extent(h0 - delta.y, MIN_ITEM_EXTENT);
        (start.y0 + (h0 - h), h)
    } else {
        (start.y0, clamp_extent(h0 + delta.y, MIN_ITEM_EXTENT))
    };
    Rect::new(x, y, x + w, y + h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, ImageItem, ImageSource, ShapeItem, ShapeKind, Stroke};

    fn image() -> ItemKind {
        ItemKind::Image(ImageItem {
            source: ImageSource::from_uri("about:blank"),
            label: "Uploaded Image".into(),
        })
    }

    fn shape() -> ItemKind {
        ItemKind::Shape(ShapeItem {
            shape: ShapeKind::Rectangle,
            fill: Color::WHITE,
            stroke: Stroke::NONE,
            corner_radius: 0.0,
            text: None,
        })
    }

    #[test]
    fn handle_corners() {
        let r = Rect::new(0.0, 0.0, 10.0, 20.0);
        assert_eq!(Handle::Nw.corner(r), Point::new(0.0, 0.0));
        assert_eq!(Handle::Se.corner(r), Point::new(10.0, 20.0));
        assert_eq!(Handle::Ne.corner(r), Point::new(10.0, 0.0));
    }

    #[test]
    fn free_west_keeps_east_edge() {
        let start = Rect::new(100.0, 100.0, 300.0, 250.0);
        let r = resize(&shape(), Handle::Nw, start, Vec2::new(50.0, 30.0), 100.0);
        assert_eq!(r, Rect::new(150.0, 130.0, 300.0, 250.0));
    }

    #[test]
    fn free_resize_never_inverts() {
        let start = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = resize(&shape(), Handle::Nw, start, Vec2::new(500.0, 500.0), 100.0);
        assert_eq!(r, Rect::new(80.0, 80.0, 100.0, 100.0));
    }

    #[test]
    fn delta_scales_with_zoom() {
        let start = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r = resize(&shape(), Handle::Se, start, Vec2::new(100.0, 50.0), 200.0);
        assert_eq!(r.size(), kurbo::Size::new(150.0, 125.0));
    }

    #[test]
    fn image_vertical_motion_is_ignored() {
        let start = Rect::new(0.0, 0.0, 200.0, 100.0);
        let r = resize(&image(), Handle::Se, start, Vec2::new(0.0, 300.0), 100.0);
        assert_eq!(r, start);
    }

    #[test]
    fn image_north_handle_moves_top_edge() {
        let start = Rect::new(0.0, 0.0, 200.0, 100.0);
        let r = resize(&image(), Handle::Ne, start, Vec2::new(100.0, 0.0), 100.0);
        assert_eq!(r, Rect::new(0.0, -50.0, 300.0, 100.0));
    }

    #[test]
    fn image_floor_keeps_height_minimum() {
        // 4:1 image: the width floor is 200 so the height stays at 50.
        let start = Rect::new(0.0, 0.0, 400.0, 100.0);
        let r = resize(&image(), Handle::Se, start, Vec2::new(-1000.0, 0.0), 100.0);
        assert!((r.width() - 200.0).abs() < 1e-9);
        assert!((r.height() - 50.0).abs() < 1e-9);
    }
}
