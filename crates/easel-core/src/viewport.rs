//! Zoom/pan state and screen ↔ scene coordinate conversion.
//!
//! Zoom is a percentage (100 = 1:1). Screen coordinates are relative to the
//! canvas container's top-left corner; scene coordinates are the units items
//! are stored in. `screen = scene * zoom/100 + pan`.

use crate::model::CanvasItem;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 10.0;
pub const MAX_ZOOM: f64 = 500.0;
/// Padding added on every side of the content box by `zoom_to_fit`.
pub const FIT_PADDING: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    zoom: f64,
    pan: Vec2,
    /// Size of the canvas container in screen pixels.
    container: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Size::new(1280.0, 800.0))
    }
}

impl Viewport {
    pub fn new(container: Size) -> Self {
        Self {
            zoom: 100.0,
            pan: Vec2::ZERO,
            container,
        }
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Zoom as a scale factor (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.zoom / 100.0
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn container(&self) -> Size {
        self.container
    }

    pub fn set_container(&mut self, container: Size) {
        self.container = container;
    }

    /// Screen-space center of the container.
    pub fn screen_center(&self) -> Point {
        Point::new(self.container.width / 2.0, self.container.height / 2.0)
    }

    pub fn screen_to_scene(&self, p: Point) -> Point {
        let s = self.scale();
        Point::new((p.x - self.pan.x) / s, (p.y - self.pan.y) / s)
    }

    pub fn scene_to_screen(&self, p: Point) -> Point {
        let s = self.scale();
        Point::new(p.x * s + self.pan.x, p.y * s + self.pan.y)
    }

    /// Convert a screen-space displacement into scene units.
    pub fn screen_delta_to_scene(&self, delta: Vec2) -> Vec2 {
        delta / self.scale()
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    /// Back to 100% with no pan.
    pub fn reset(&mut self) {
        self.zoom = 100.0;
        self.pan = Vec2::ZERO;
    }

    /// Multiply the zoom by `factor` (clamped to `[MIN_ZOOM, MAX_ZOOM]`),
    /// keeping the scene point under `anchor` fixed on screen. Without an
    /// anchor the container center is used. Returns the new zoom.
    pub fn set_zoom(&mut self, factor: f64, anchor: Option<Point>) -> f64 {
        if !factor.is_finite() || factor <= 0.0 {
            return self.zoom;
        }
        let old = self.zoom;
        let new = (old * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let anchor = anchor.unwrap_or_else(|| self.screen_center()).to_vec2();
        let ratio = new / old;
        self.pan = anchor - (anchor - self.pan) * ratio;
        self.zoom = new;
        new
    }

    /// Scroll the view so `scene_point` sits at the container center.
    pub fn center_on(&mut self, scene_point: Point) {
        let s = self.scale();
        self.pan = self.screen_center().to_vec2() - scene_point.to_vec2() * s;
    }

    /// Top-left scene position that centers a box of `size` in the view.
    pub fn centered_origin(&self, size: Size) -> Point {
        let center = self.screen_to_scene(self.screen_center());
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0)
    }

    /// Fit every item into the container, never zooming in past 100%.
    ///
    /// An empty scene resets the view. The resulting zoom is floored to a
    /// whole percentage.
    pub fn zoom_to_fit<'a>(&mut self, items: impl IntoIterator<Item = &'a CanvasItem>) {
        let Some(content) = union_bounds(items) else {
            self.reset();
            return;
        };
        let padded_w = content.width() + FIT_PADDING * 2.0;
        let padded_h = content.height() + FIT_PADDING * 2.0;
        let fit = (self.container.width / padded_w)
            .min(self.container.height / padded_h)
            .min(1.0);
        let zoom = if fit.is_finite() {
            (fit * 100.0).floor().clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            MIN_ZOOM
        };
        self.zoom = zoom;
        self.center_on(content.center());
        log::debug!("zoom to fit {content:?} -> {zoom}%");
    }

    /// The part of the scene currently visible, in scene units.
    pub fn visible_scene_rect(&self) -> Rect {
        Rect::from_points(
            self.screen_to_scene(Point::ZERO),
            self.screen_to_scene(Point::new(self.container.width, self.container.height)),
        )
    }
}

/// Smallest rectangle containing every item's bounds.
pub fn union_bounds<'a>(items: impl IntoIterator<Item = &'a CanvasItem>) -> Option<Rect> {
    items
        .into_iter()
        .map(CanvasItem::bounds)
        .reduce(|acc, b| acc.union(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_at_default_zoom() {
        let vp = Viewport::default();
        let p = Point::new(12.0, -7.5);
        assert_eq!(vp.screen_to_scene(p), p);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut vp = Viewport::default();
        assert_eq!(vp.set_zoom(100.0, None), MAX_ZOOM);
        assert_eq!(vp.set_zoom(0.0001, None), MIN_ZOOM);
    }

    #[test]
    fn degenerate_factor_is_ignored() {
        let mut vp = Viewport::default();
        assert_eq!(vp.set_zoom(f64::NAN, None), 100.0);
        assert_eq!(vp.set_zoom(-2.0, None), 100.0);
        assert_eq!(vp.pan(), Vec2::ZERO);
    }

    #[test]
    fn unanchored_zoom_keeps_center_fixed() {
        let mut vp = Viewport::new(Size::new(800.0, 600.0));
        vp.pan_by(Vec2::new(35.0, -20.0));
        let center = vp.screen_center();
        let before = vp.screen_to_scene(center);
        vp.set_zoom(1.1, None);
        let after = vp.screen_to_scene(center);
        assert!((before - after).hypot() < 1e-9);
    }

    #[test]
    fn fit_on_empty_scene_resets() {
        let mut vp = Viewport::default();
        vp.set_zoom(2.0, Some(Point::new(10.0, 10.0)));
        vp.zoom_to_fit(std::iter::empty::<&CanvasItem>());
        assert_eq!(vp.zoom(), 100.0);
        assert_eq!(vp.pan(), Vec2::ZERO);
    }

    #[test]
    fn centered_origin_centers_box() {
        let mut vp = Viewport::new(Size::new(800.0, 600.0));
        vp.set_zoom(2.0, Some(Point::new(100.0, 50.0)));
        let size = Size::new(300.0, 150.0);
        let origin = vp.centered_origin(size);
        let center = Point::new(origin.x + 150.0, origin.y + 75.0);
        let on_screen = vp.scene_to_screen(center);
        assert!((on_screen - vp.screen_center()).hypot() < 1e-9);
    }
}
