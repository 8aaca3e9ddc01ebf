//! Seams for the upload and image-generation collaborators.
//!
//! Decoding and network exchange live outside the editor. Uploads arrive as
//! bytes plus a resolved natural size; generation is a two-step exchange: the
//! editor shapes a `GenerationRequest` into a `PendingGeneration` ticket, the
//! host performs the request however it likes, and later hands the ticket
//! back together with the outcome. The scene stays fully interactive in
//! between and is only read at completion time.

use easel_core::{ImageSource, MIN_IMAGE_EXTENT, Size};
use serde::{Deserialize, Serialize};

// ─── Upload ──────────────────────────────────────────────────────────────

/// An image decoded by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub source: ImageSource,
    /// Natural pixel size reported by the decoder.
    pub natural: Size,
}

impl UploadedImage {
    pub fn from_bytes(mime: &str, bytes: &[u8], natural: Size) -> Self {
        Self {
            source: ImageSource::from_bytes(mime, bytes),
            natural,
        }
    }
}

/// Default placement size for an upload: the longer side becomes `baseline`
/// and the aspect ratio is kept. A short side below the image minimum is
/// raised to it, growing the long side with it. Degenerate sizes fall back
/// to a square.
pub fn upload_size(natural: Size, baseline: f64) -> Size {
    let (w, h) = (natural.width, natural.height);
    if !(w.is_finite() && h.is_finite()) || w <= 0.0 || h <= 0.0 {
        return Size::new(baseline, baseline);
    }
    let ratio = w / h;
    if w > h {
        let height = baseline / ratio;
        if height < MIN_IMAGE_EXTENT {
            Size::new(MIN_IMAGE_EXTENT * w / h, MIN_IMAGE_EXTENT)
        } else {
            Size::new(baseline, height)
        }
    } else {
        let width = baseline * ratio;
        if width < MIN_IMAGE_EXTENT {
            Size::new(MIN_IMAGE_EXTENT, MIN_IMAGE_EXTENT * h / w)
        } else {
            Size::new(width, baseline)
        }
    }
}

// ─── Generation ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectRatio {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "16:9")]
    Wide,
    #[serde(rename = "9:16")]
    Tall,
    #[serde(rename = "4:3")]
    Landscape,
    #[serde(rename = "3:4")]
    Portrait,
}

impl AspectRatio {
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Square,
        AspectRatio::Wide,
        AspectRatio::Tall,
        AspectRatio::Landscape,
        AspectRatio::Portrait,
    ];

    /// The label sent to the generation service.
    pub fn label(self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
            AspectRatio::Landscape => "4:3",
            AspectRatio::Portrait => "3:4",
        }
    }

    /// Width divided by height.
    pub fn value(self) -> f64 {
        match self {
            AspectRatio::Square => 1.0,
            AspectRatio::Wide => 16.0 / 9.0,
            AspectRatio::Tall => 9.0 / 16.0,
            AspectRatio::Landscape => 4.0 / 3.0,
            AspectRatio::Portrait => 3.0 / 4.0,
        }
    }

    /// Placement size with the longer side at `baseline`.
    pub fn size(self, baseline: f64) -> Size {
        let r = self.value();
        if r > 1.0 {
            Size::new(baseline, baseline / r)
        } else {
            Size::new(baseline * r, baseline)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtStyle {
    #[default]
    None,
    Photorealistic,
    Cinematic,
    Anime,
    #[serde(rename = "Digital Art")]
    DigitalArt,
    #[serde(rename = "Oil Painting")]
    OilPainting,
    #[serde(rename = "Pixel Art")]
    PixelArt,
    #[serde(rename = "3D Render")]
    Render3d,
    Minimalist,
}

impl ArtStyle {
    pub fn label(self) -> &'static str {
        match self {
            ArtStyle::None => "None",
            ArtStyle::Photorealistic => "Photorealistic",
            ArtStyle::Cinematic => "Cinematic",
            ArtStyle::Anime => "Anime",
            ArtStyle::DigitalArt => "Digital Art",
            ArtStyle::OilPainting => "Oil Painting",
            ArtStyle::PixelArt => "Pixel Art",
            ArtStyle::Render3d => "3D Render",
            ArtStyle::Minimalist => "Minimalist",
        }
    }
}

/// What the host should send to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Prompt with the style suffix applied.
    pub prompt: String,
    pub aspect: AspectRatio,
}

impl GenerationRequest {
    /// Shape a request. Blank prompts produce nothing.
    pub fn new(prompt: &str, style: ArtStyle, aspect: AspectRatio) -> Option<Self> {
        if prompt.trim().is_empty() {
            return None;
        }
        let prompt = match style {
            ArtStyle::None => prompt.to_string(),
            style => format!("{prompt}, in {} style", style.label()),
        };
        Some(Self { prompt, aspect })
    }
}

/// A request in flight. Hand it back to `Editor::complete_generation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGeneration {
    pub ticket: u64,
    pub request: GenerationRequest,
}

/// Successful generation outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    pub source: ImageSource,
}

impl GeneratedImage {
    /// Wrap a base64-encoded PNG as returned by the service.
    pub fn from_base64_png(encoded: &str) -> Self {
        Self {
            source: ImageSource::from_uri(format!("data:image/png;base64,{encoded}")),
        }
    }
}
