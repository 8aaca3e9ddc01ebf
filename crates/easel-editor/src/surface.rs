//! The externally visible editor state, as one serializable value.

use crate::gesture::Mode;
use crate::tools::Tool;
use easel_core::{CanvasItem, ItemId, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Everything a host rendering layer needs to draw the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSurface {
    /// Bottom to top.
    pub items: Vec<CanvasItem>,
    pub selection: Vec<ItemId>,
    pub zoom: f64,
    pub pan: Vec2,
    pub history_step: usize,
    pub history_len: usize,
    pub mode: Mode,
    pub tool: Tool,
    /// Live marquee rectangle in scene units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marquee: Option<Rect>,
    /// Text item being edited and its uncommitted content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editing: Option<TextDraft>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDraft {
    pub id: ItemId,
    pub draft: String,
}

impl SceneSurface {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
