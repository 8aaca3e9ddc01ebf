//! Editor configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is
//! a valid configuration. Geometry invariants such as minimum item sizes and
//! the zoom range are fixed in `easel-core` and cannot be configured.

use crate::error::EditorError;
use easel_core::{Color, Size, Stroke};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas container size in screen pixels.
    pub container: Size,
    /// Stroke color for new freehand paths, as `#RRGGBB`.
    #[serde(with = "hex_color")]
    pub pen_color: Color,
    pub pen_width: f64,
    /// Wheel-up / zoom-in-button multiplier.
    pub zoom_in_factor: f64,
    /// Wheel-down / zoom-out-button multiplier.
    pub zoom_out_factor: f64,
    /// Resize handle hit radius in screen pixels.
    pub handle_tolerance: f64,
    /// Offset applied to duplicated items, in scene units.
    pub duplicate_offset: f64,
    /// Longer side of uploaded and generated images, in scene units.
    pub placement_baseline: f64,
    /// Gap left between the last item and a newly generated image.
    pub generation_gap: f64,
    /// Maximum number of history snapshots. `None` keeps everything.
    pub history_depth: Option<usize>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            container: Size::new(1280.0, 800.0),
            pen_color: Color::BLACK,
            pen_width: 5.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            handle_tolerance: 6.0,
            duplicate_offset: 20.0,
            placement_baseline: 300.0,
            generation_gap: 40.0,
            history_depth: None,
        }
    }
}

impl EditorConfig {
    pub fn from_json_str(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EditorError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| EditorError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn pen_stroke(&self) -> Stroke {
        Stroke::new(self.pen_color, self.pen_width)
    }
}

mod hex_color {
    use easel_core::Color;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(color: &Color, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Color, D::Error> {
        let s = String::deserialize(d)?;
        Color::parse(&s).ok_or_else(|| de::Error::custom(format!("invalid color {s:?}")))
    }
}
