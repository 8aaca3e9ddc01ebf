pub mod id;
pub mod model;
pub mod path;
pub mod resize;
pub mod scene;
pub mod selection;
pub mod style;
pub mod viewport;

pub use id::ItemId;
pub use model::*;
pub use path::{CapturedPath, PathCapture};
pub use resize::{Handle, resize};
pub use scene::{Scene, Snapshot};
pub use selection::Selection;
pub use style::StyleEdit;
pub use viewport::Viewport;

// Re-export kurbo geometry so downstream crates share one version.
pub use kurbo::{Point, Rect, Size, Vec2};
