//! Tool system for canvas interactions.
//!
//! The active tool decides what a primary-button pointer-down starts:
//!
//! | Tool | Pointer-down starts |
//! |------|---------------------|
//! | **Select** | resize, drag or marquee, depending on what is hit |
//! | **Hand** | panning |
//! | **Pen** | a freehand path |
//! | **Place** | one new item centered on the pointer, then back to Select |
//!
//! The middle button pans regardless of tool.

use easel_core::{
    CanvasItem, Color, FontSpec, FontWeight, ItemKind, Point, ShapeItem, ShapeKind, Size, Stroke,
    TextAlign, TextBackground, TextItem, TextRun,
};
use serde::{Deserialize, Serialize};

/// Default fill for newly placed shapes (`#94a3b8`).
const PLACEMENT_FILL: Color = Color::rgba(148.0 / 255.0, 163.0 / 255.0, 184.0 / 255.0, 1.0);
const PLACEMENT_RADIUS: f64 = 8.0;
const PLACEHOLDER_TEXT: &str = "Type Here";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tool", content = "placement", rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Hand,
    Pen,
    Place(Placement),
}

impl Tool {
    /// Resolve a toolbar name. Placement tools are armed with a template
    /// instead of by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "select" | "pointer" => Some(Tool::Select),
            "hand" => Some(Tool::Hand),
            "pen" => Some(Tool::Pen),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Hand => "hand",
            Tool::Pen => "pen",
            Tool::Place(_) => "place",
        }
    }
}

/// What a placement click creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "shape", rename_all = "snake_case")]
pub enum Placement {
    Shape(ShapeKind),
    Text,
    /// A text item drawn over a background shape.
    TextWithShape(ShapeKind),
}

impl Placement {
    pub fn size(&self) -> Size {
        match self {
            Placement::Shape(_) => Size::new(200.0, 200.0),
            Placement::Text | Placement::TextWithShape(_) => Size::new(200.0, 50.0),
        }
    }

    fn kind(&self) -> ItemKind {
        let fill = PLACEMENT_FILL;
        match *self {
            Placement::Shape(shape) => ItemKind::Shape(ShapeItem {
                shape,
                fill,
                stroke: Stroke::NONE,
                corner_radius: PLACEMENT_RADIUS,
                text: None,
            }),
            Placement::Text => ItemKind::Text(TextItem {
                run: TextRun {
                    content: PLACEHOLDER_TEXT.into(),
                    font: FontSpec {
                        family: "Inter".into(),
                        size: 32.0,
                        weight: FontWeight::REGULAR,
                    },
                    color: Color::BLACK,
                    align: TextAlign::Left,
                },
                background: None,
            }),
            Placement::TextWithShape(shape) => ItemKind::Text(TextItem {
                run: TextRun::new(PLACEHOLDER_TEXT),
                background: Some(TextBackground {
                    shape,
                    fill,
                    stroke: Stroke::NONE,
                }),
            }),
        }
    }

    /// New item from this template, centered on `center` (scene units).
    pub fn instantiate(&self, center: Point) -> CanvasItem {
        let size = self.size();
        let origin = Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0);
        CanvasItem::new(self.kind(), origin, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_names() {
        assert_eq!(Tool::from_name("pen"), Some(Tool::Pen));
        assert_eq!(Tool::from_name("pointer"), Some(Tool::Select));
        assert_eq!(Tool::from_name("lasso"), None);
    }

    #[test]
    fn shape_template_is_centered() {
        let item = Placement::Shape(ShapeKind::Star).instantiate(Point::new(300.0, 300.0));
        assert_eq!(item.origin, Point::new(200.0, 200.0));
        assert_eq!(item.size, Size::new(200.0, 200.0));
        assert_eq!(item.opacity, 100);
        match &item.kind {
            ItemKind::Shape(shape) => {
                assert_eq!(shape.shape, ShapeKind::Star);
                assert_eq!(shape.fill.to_hex(), "#94A3B8");
                assert_eq!(shape.corner_radius, 8.0);
            }
            _ => panic!("expected Shape"),
        }
    }

    #[test]
    fn text_template() {
        let item = Placement::Text.instantiate(Point::new(100.0, 25.0));
        assert_eq!(item.origin, Point::new(0.0, 0.0));
        match &item.kind {
            ItemKind::Text(text) => {
                assert_eq!(text.run.content, "Type Here");
                assert_eq!(text.run.font.size, 32.0);
                assert_eq!(text.run.align, TextAlign::Left);
                assert!(text.background.is_none());
            }
            _ => panic!("expected Text"),
        }
    }

    #[test]
    fn text_with_shape_has_background() {
        let item = Placement::TextWithShape(ShapeKind::Message).instantiate(Point::ZERO);
        match &item.kind {
            ItemKind::Text(text) => {
                assert_eq!(text.background.as_ref().map(|b| b.shape), Some(ShapeKind::Message));
            }
            _ => panic!("expected Text"),
        }
    }
}
