//! Single-field property edits issued by style panels.

use crate::model::{CanvasItem, Color, FontWeight, ItemKind, ShapeKind, Stroke, TextAlign, TextRun};
use kurbo::Size;
use serde::{Deserialize, Serialize};

/// One discrete property change. Each applied edit is one undo step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum StyleEdit {
    /// Text color for text items, fill color for everything else that has one.
    Fill(Color),
    Stroke { color: Color, width: f64 },
    CornerRadius(f64),
    Opacity(i64),
    FontFamily(String),
    FontWeight(FontWeight),
    FontSize(f64),
    TextAlign(TextAlign),
    ShapeKind(ShapeKind),
    Dimensions { width: f64, height: f64 },
}

/// The text run an edit should target: the text item's own run, or a
/// shape's caption.
fn text_run_mut(kind: &mut ItemKind) -> Option<&mut TextRun> {
    match kind {
        ItemKind::Text(text) => Some(&mut text.run),
        ItemKind::Shape(shape) => shape.text.as_mut(),
        ItemKind::Image(_) | ItemKind::Path(_) => None,
    }
}

impl CanvasItem {
    /// Apply a style edit. Returns `false` (and leaves the item untouched) when
    /// the edit does not apply to this item's kind.
    pub fn apply_style(&mut self, edit: &StyleEdit) -> bool {
        match edit {
            StyleEdit::Opacity(value) => {
                self.set_opacity(*value);
                true
            }
            StyleEdit::Dimensions { width, height } => {
                self.size = Size::new(*width, *height);
                self.clamp_invariants();
                true
            }
            StyleEdit::Fill(color) => match &mut self.kind {
                ItemKind::Text(text) => {
                    text.run.color = *color;
                    true
                }
                ItemKind::Shape(shape) => {
                    shape.fill = *color;
                    true
                }
                ItemKind::Path(path) => {
                    path.stroke.color = *color;
                    true
                }
                ItemKind::Image(_) => false,
            },
            StyleEdit::Stroke { color, width } => {
                let stroke = Stroke::new(*color, *width);
                match &mut self.kind {
                    ItemKind::Shape(shape) => shape.stroke = stroke,
                    ItemKind::Path(path) => path.stroke = stroke,
                    ItemKind::Text(text) => match &mut text.background {
                        Some(bg) => bg.stroke = stroke,
                        None => return false,
                    },
                    ItemKind::Image(_) => return false,
                }
                true
            }
            StyleEdit::CornerRadius(radius) => match &mut self.kind {
                ItemKind::Shape(shape) if shape.shape == ShapeKind::Rectangle => {
                    shape.corner_radius = radius.max(0.0);
                    true
                }
                _ => false,
            },
            StyleEdit::ShapeKind(kind) => match &mut self.kind {
                ItemKind::Shape(shape) => {
                    shape.shape = *kind;
                    true
                }
                ItemKind::Text(text) => match &mut text.background {
                    Some(bg) => {
                        bg.shape = *kind;
                        true
                    }
                    None => false,
                },
                ItemKind::Image(_) | ItemKind::Path(_) => false,
            },
            StyleEdit::FontFamily(family) => match text_run_mut(&mut self.kind) {
                Some(run) => {
                    run.font.family.clone_from(family);
                    true
                }
                None => false,
            },
            StyleEdit::FontWeight(weight) => match text_run_mut(&mut self.kind) {
                Some(run) => {
                    run.font.weight = *weight;
                    true
                }
                None => false,
            },
            StyleEdit::FontSize(size) => match text_run_mut(&mut self.kind) {
                Some(run) => {
                    run.font.size = if size.is_nan() { 1.0 } else { size.max(1.0) };
                    true
                }
                None => false,
            },
            StyleEdit::TextAlign(align) => match text_run_mut(&mut self.kind) {
                Some(run) => {
                    run.align = *align;
                    true
                }
                None => false,
            },
        }
    }
}
