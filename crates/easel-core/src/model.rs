//! Canvas item data model.
//!
//! A scene is a flat, ordered list of `CanvasItem`s; z-order is list order
//! (later = on top). Every item has a position, a size and an opacity, plus a
//! kind-specific payload carried by the `ItemKind` sum type so that every
//! consumer (resize, render, serialize) matches all four kinds.

use crate::id::ItemId;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use kurbo::{BezPath, Ellipse, Point, Rect, RoundedRect, Shape, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::sync::Arc;

/// Minimum width/height of an image item, in scene units.
pub const MIN_IMAGE_EXTENT: f64 = 50.0;
/// Minimum width/height of shape, text and path items, in scene units.
pub const MIN_ITEM_EXTENT: f64 = 20.0;

/// Flatten tolerance when converting curves to paths.
const OUTLINE_TOLERANCE: f64 = 0.1;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn hex_pair(hi: u8, lo: u8) -> Option<f32> {
    Some(f32::from(hex_val(hi)? << 4 | hex_val(lo)?) / 255.0)
}

fn hex_single(c: u8) -> Option<f32> {
    Some(f32::from(hex_val(c)? * 17) / 255.0)
}

impl Color {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` or the keyword
    /// `transparent`. The leading `#` is optional.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Some(Self::TRANSPARENT);
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        let b = hex.as_bytes();
        match b.len() {
            3 => Some(Self::rgba(
                hex_single(b[0])?,
                hex_single(b[1])?,
                hex_single(b[2])?,
                1.0,
            )),
            4 => Some(Self::rgba(
                hex_single(b[0])?,
                hex_single(b[1])?,
                hex_single(b[2])?,
                hex_single(b[3])?,
            )),
            6 => Some(Self::rgba(
                hex_pair(b[0], b[1])?,
                hex_pair(b[2], b[3])?,
                hex_pair(b[4], b[5])?,
                1.0,
            )),
            8 => Some(Self::rgba(
                hex_pair(b[0], b[1])?,
                hex_pair(b[2], b[3])?,
                hex_pair(b[4], b[5])?,
                hex_pair(b[6], b[7])?,
            )),
            _ => None,
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (channel(self.r), channel(self.g), channel(self.b), channel(self.a));
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

// ─── Stroke / Font / Text ────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub const NONE: Self = Self {
        color: Color::TRANSPARENT,
        width: 0.0,
    };

    pub fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width: width.max(0.0),
        }
    }
}

/// CSS-style numeric font weight, 100..=900.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const LIGHT: Self = Self(300);
    pub const REGULAR: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const BOLD: Self = Self(700);
    pub const BLACK: Self = Self(900);

    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
    pub weight: FontWeight,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Inter".into(),
            size: 20.0,
            weight: FontWeight::REGULAR,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// A run of styled text, used by text items and by shapes with a caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub content: String,
    pub font: FontSpec,
    pub color: Color,
    pub align: TextAlign,
}

impl TextRun {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            font: FontSpec::default(),
            color: Color::BLACK,
            align: TextAlign::default(),
        }
    }
}

// ─── Shapes ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Star,
    Arrow,
    Message,
}

// Polygon outlines in a 0..100 box.
const TRIANGLE: &[(f64, f64)] = &[(50.0, 0.0), (100.0, 100.0), (0.0, 100.0)];
const STAR: &[(f64, f64)] = &[
    (50.0, 0.0),
    (61.0, 35.0),
    (98.0, 35.0),
    (68.0, 57.0),
    (79.0, 91.0),
    (50.0, 70.0),
    (21.0, 91.0),
    (32.0, 57.0),
    (2.0, 35.0),
    (39.0, 35.0),
];
const ARROW: &[(f64, f64)] = &[
    (0.0, 35.0),
    (60.0, 35.0),
    (60.0, 10.0),
    (100.0, 50.0),
    (60.0, 90.0),
    (60.0, 65.0),
    (0.0, 65.0),
];

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Star,
        ShapeKind::Arrow,
        ShapeKind::Message,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Star => "star",
            ShapeKind::Arrow => "arrow",
            ShapeKind::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Outline of this shape stretched to `bounds`.
    ///
    /// `corner_radius` only affects rectangles.
    pub fn outline(self, bounds: Rect, corner_radius: f64) -> BezPath {
        let to_bounds = |(x, y): (f64, f64)| {
            Point::new(
                bounds.x0 + x / 100.0 * bounds.width(),
                bounds.y0 + y / 100.0 * bounds.height(),
            )
        };
        match self {
            ShapeKind::Rectangle => {
                let r = corner_radius
                    .max(0.0)
                    .min(bounds.width().min(bounds.height()) / 2.0);
                RoundedRect::from_rect(bounds, r).to_path(OUTLINE_TOLERANCE)
            }
            ShapeKind::Circle => Ellipse::from_rect(bounds).to_path(OUTLINE_TOLERANCE),
            ShapeKind::Triangle => polygon(TRIANGLE.iter().copied().map(to_bounds)),
            ShapeKind::Star => polygon(STAR.iter().copied().map(to_bounds)),
            ShapeKind::Arrow => polygon(ARROW.iter().copied().map(to_bounds)),
            ShapeKind::Message => {
                // Speech bubble: rounded body with a tail at the bottom left.
                let mut path = BezPath::new();
                path.move_to(to_bounds((10.0, 10.0)));
                path.line_to(to_bounds((90.0, 10.0)));
                path.quad_to(to_bounds((100.0, 10.0)), to_bounds((100.0, 20.0)));
                path.line_to(to_bounds((100.0, 70.0)));
                path.quad_to(to_bounds((100.0, 80.0)), to_bounds((90.0, 80.0)));
                path.line_to(to_bounds((30.0, 80.0)));
                path.line_to(to_bounds((10.0, 95.0)));
                path.line_to(to_bounds((10.0, 80.0)));
                path.quad_to(to_bounds((0.0, 80.0)), to_bounds((0.0, 70.0)));
                path.line_to(to_bounds((0.0, 20.0)));
                path.quad_to(to_bounds((0.0, 10.0)), to_bounds((10.0, 10.0)));
                path.close_path();
                path
            }
        }
    }
}

fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

// ─── Item payloads ───────────────────────────────────────────────────────

/// Reference to an image's pixels, as a URI (usually a `data:` URI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageSource(Arc<str>);

impl ImageSource {
    pub fn from_uri(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    /// Encode raw image bytes as a base64 `data:` URI.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        let uri = format!("data:{mime};base64,{}", BASE64.encode(bytes));
        Self(uri.into())
    }

    pub fn uri(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    pub source: ImageSource,
    /// Generation prompt, or a caption such as "Uploaded Image".
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeItem {
    pub shape: ShapeKind,
    pub fill: Color,
    pub stroke: Stroke,
    /// Only meaningful for rectangles.
    pub corner_radius: f64,
    pub text: Option<TextRun>,
}

/// Shape drawn behind a text item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBackground {
    pub shape: ShapeKind,
    pub fill: Color,
    pub stroke: Stroke,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextItem {
    pub run: TextRun,
    pub background: Option<TextBackground>,
}

/// Freehand stroke. Points are relative to the owning item's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathItem {
    pub points: Vec<Point>,
    pub stroke: Stroke,
}

impl PathItem {
    /// SVG path data (`M x y L x y ...`) in item-local coordinates.
    pub fn svg_path_data(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            let cmd = if i == 0 { "M" } else { " L" };
            let _ = write!(out, "{cmd} {} {}", p.x, p.y);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemKind {
    Image(ImageItem),
    Shape(ShapeItem),
    Text(TextItem),
    Path(PathItem),
}

impl ItemKind {
    /// Minimum width and height for this kind, applied per axis.
    pub fn min_extent(&self) -> f64 {
        match self {
            ItemKind::Image(_) => MIN_IMAGE_EXTENT,
            ItemKind::Shape(_) | ItemKind::Text(_) | ItemKind::Path(_) => MIN_ITEM_EXTENT,
        }
    }

    /// Images keep their aspect ratio when resized; everything else resizes freely.
    pub fn is_aspect_locked(&self) -> bool {
        matches!(self, ItemKind::Image(_))
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Image(_) => "image",
            ItemKind::Shape(_) => "shape",
            ItemKind::Text(_) => "text",
            ItemKind::Path(_) => "path",
        }
    }
}

// ─── Canvas item ─────────────────────────────────────────────────────────

/// Clamp an extent to `min`, mapping NaN to `min`.
pub fn clamp_extent(value: f64, min: f64) -> f64 {
    if value.is_nan() { min } else { value.max(min) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasItem {
    pub id: ItemId,
    /// Top-left corner in scene units.
    pub origin: Point,
    pub size: Size,
    /// 0..=100.
    pub opacity: u8,
    pub kind: ItemKind,
}

impl CanvasItem {
    /// Create an item with a fresh id and full opacity. Size is clamped.
    pub fn new(kind: ItemKind, origin: Point, size: Size) -> Self {
        let mut item = Self {
            id: ItemId::new(),
            origin,
            size,
            opacity: 100,
            kind,
        };
        item.clamp_invariants();
        item
    }

    pub fn with_opacity(mut self, opacity: i64) -> Self {
        self.set_opacity(opacity);
        self
    }

    pub fn set_opacity(&mut self, opacity: i64) {
        self.opacity = opacity.clamp(0, 100) as u8;
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    pub fn center(&self) -> Point {
        self.origin + Vec2::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Inclusive point containment, in scene units.
    pub fn contains(&self, p: Point) -> bool {
        let b = self.bounds();
        p.x >= b.x0 && p.x <= b.x1 && p.y >= b.y0 && p.y <= b.y1
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.origin = bounds.origin();
        self.size = bounds.size();
        self.clamp_invariants();
    }

    /// Enforce the per-kind minimum on both axes independently and cap
    /// opacity at 100.
    pub fn clamp_invariants(&mut self) {
        let min = self.kind.min_extent();
        self.size = Size::new(
            clamp_extent(self.size.width, min),
            clamp_extent(self.size.height, min),
        );
        self.opacity = self.opacity.min(100);
    }

    /// Copy of this item with a fresh id, shifted by `offset`.
    pub fn duplicate(&self, offset: Vec2) -> Self {
        Self {
            id: ItemId::new(),
            origin: self.origin + offset,
            ..self.clone()
        }
    }

    /// Caption for a layer list.
    pub fn label(&self) -> &str {
        match &self.kind {
            ItemKind::Image(image) => image.label.as_str(),
            ItemKind::Text(text) => text.run.content.as_str(),
            ItemKind::Shape(shape) => shape.shape.name(),
            ItemKind::Path(_) => "Path",
        }
    }
}
