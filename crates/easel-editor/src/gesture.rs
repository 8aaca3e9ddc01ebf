//! The active gesture: one pointer-down → move* → pointer-up interaction.
//!
//! A `Gesture` is created on pointer-down and consumed on pointer-up or
//! cancel. It owns everything the gesture needs between samples, so
//! nothing about a finished gesture lingers in the editor.

use easel_core::{Handle, ItemId, PathCapture, Point, Rect};
use serde::{Deserialize, Serialize};

/// Interaction state reported to hosts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Idle,
    Panning,
    Marquee,
    DragItems,
    ResizeItem,
    DrawPath,
    /// A placement template is armed and waiting for a click.
    PlaceNew,
    EditText,
}

#[derive(Debug, Clone)]
pub enum Gesture {
    Panning {
        /// Last pointer position, screen pixels.
        last: Point,
    },
    Marquee {
        /// Scene-space corners.
        anchor: Point,
        current: Point,
    },
    DragItems {
        last: Point,
        moved: bool,
    },
    ResizeItem {
        id: ItemId,
        handle: Handle,
        /// Item bounds at pointer-down, scene units.
        start: Rect,
        /// Pointer at pointer-down, screen pixels.
        pointer_start: Point,
        moved: bool,
    },
    DrawPath(PathCapture),
    EditText {
        id: ItemId,
        draft: String,
    },
}

impl Gesture {
    pub fn mode(&self) -> Mode {
        match self {
            Gesture::Panning { .. } => Mode::Panning,
            Gesture::Marquee { .. } => Mode::Marquee,
            Gesture::DragItems { .. } => Mode::DragItems,
            Gesture::ResizeItem { .. } => Mode::ResizeItem,
            Gesture::DrawPath(_) => Mode::DrawPath,
            Gesture::EditText { .. } => Mode::EditText,
        }
    }

    /// Normalized marquee rectangle in scene units.
    pub fn marquee_rect(&self) -> Option<Rect> {
        match self {
            Gesture::Marquee { anchor, current } => Some(Rect::from_points(*anchor, *current)),
            _ => None,
        }
    }

    /// Whether this gesture is driven by the pointer (as opposed to text
    /// editing, which outlives pointer events).
    pub fn is_pointer_driven(&self) -> bool {
        !matches!(self, Gesture::EditText { .. })
    }
}
