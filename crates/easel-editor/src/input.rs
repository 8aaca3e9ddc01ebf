//! Input abstraction layer.
//!
//! Normalizes pointer, wheel, keyboard and focus events into `InputEvent`,
//! consumed by `Editor::handle`. Pointer positions are screen pixels relative
//! to the canvas container's top-left corner.

use easel_core::{Point, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    /// Ctrl on most platforms, ⌘ on macOS.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }

    /// Modifier that makes a click toggle membership instead of replacing
    /// the selection.
    pub fn extends_selection(&self) -> bool {
        self.shift || self.ctrl || self.meta
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    #[default]
    Primary,
    Middle,
    Secondary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// `KeyboardEvent.key` value, e.g. `"z"`, `"Delete"`, `" "`.
    pub key: String,
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Auto-repeat while the key is held.
    #[serde(default)]
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
            repeat: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_space(&self) -> bool {
        self.key == " " || self.key == "Space"
    }
}

/// A normalized input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    PointerDown {
        position: Point,
        #[serde(default)]
        button: PointerButton,
        #[serde(default)]
        modifiers: Modifiers,
    },
    PointerMove {
        position: Point,
    },
    /// Pointer released, inside or outside the canvas.
    PointerUp {
        position: Point,
    },
    /// The pointer stream ended without a release (capture lost).
    PointerCancel,
    DoubleClick {
        position: Point,
    },
    Wheel {
        position: Point,
        delta: Vec2,
        #[serde(default)]
        modifiers: Modifiers,
    },
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    /// The canvas window lost focus.
    FocusLost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_ctrl_or_meta() {
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        let meta = Modifiers {
            meta: true,
            ..Modifiers::NONE
        };
        assert!(ctrl.command() && meta.command());
        assert!(!Modifiers::NONE.command());
    }

    #[test]
    fn pointer_down_defaults() {
        let ev: InputEvent =
            serde_json::from_str(r#"{ "event": "pointer_down", "position": { "x": 1, "y": 2 } }"#)
                .unwrap();
        assert_eq!(
            ev,
            InputEvent::PointerDown {
                position: Point::new(1.0, 2.0),
                button: PointerButton::Primary,
                modifiers: Modifiers::NONE,
            }
        );
    }

    #[test]
    fn key_event_from_json() {
        let ev: InputEvent =
            serde_json::from_str(r#"{ "event": "key_down", "key": "z", "modifiers": { "ctrl": true } }"#)
                .unwrap();
        match ev {
            InputEvent::KeyDown(key) => {
                assert_eq!(key.key, "z");
                assert!(key.modifiers.command());
                assert!(!key.repeat);
            }
            _ => panic!("expected KeyDown"),
        }
    }
}
