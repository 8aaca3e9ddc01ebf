pub mod config;
pub mod editor;
pub mod error;
pub mod gesture;
pub mod hit;
pub mod history;
pub mod import;
pub mod input;
pub mod popover;
pub mod shortcuts;
pub mod surface;
pub mod tools;

pub use config::EditorConfig;
pub use editor::Editor;
pub use error::{EditorError, GenerationError};
pub use gesture::{Gesture, Mode};
pub use history::HistoryStack;
pub use import::{
    ArtStyle, AspectRatio, GeneratedImage, GenerationRequest, PendingGeneration, UploadedImage,
};
pub use input::{InputEvent, KeyEvent, Modifiers, PointerButton};
pub use popover::{PopoverId, Popovers};
pub use surface::SceneSurface;
pub use tools::{Placement, Tool};
