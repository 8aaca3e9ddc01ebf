//! Click-outside dismissal for floating panels.
//!
//! Each open popover registers its screen bounds once. The editor runs
//! `dismiss_outside` at the start of every pointer-down; any popover the
//! pointer is not inside is closed and reported back to the host.

use easel_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Host-chosen popover name, e.g. `"shape-menu"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PopoverId(pub String);

impl From<&str> for PopoverId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Popovers {
    open: Vec<(PopoverId, Rect)>,
}

impl Popovers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or move) a popover occupying `bounds` in screen pixels.
    pub fn open(&mut self, id: impl Into<PopoverId>, bounds: Rect) {
        let id = id.into();
        self.open.retain(|(open, _)| *open != id);
        self.open.push((id, bounds));
    }

    pub fn close(&mut self, id: &PopoverId) -> bool {
        let before = self.open.len();
        self.open.retain(|(open, _)| open != id);
        before != self.open.len()
    }

    pub fn is_open(&self, id: &PopoverId) -> bool {
        self.open.iter().any(|(open, _)| open == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &PopoverId> {
        self.open.iter().map(|(id, _)| id)
    }

    /// Close every popover whose bounds do not contain `pointer`. Returns the
    /// closed ids in the order they were opened.
    pub fn dismiss_outside(&mut self, pointer: Point) -> Vec<PopoverId> {
        let mut closed = Vec::new();
        self.open.retain(|(id, bounds)| {
            let inside = pointer.x >= bounds.x0
                && pointer.x <= bounds.x1
                && pointer.y >= bounds.y0
                && pointer.y <= bounds.y1;
            if !inside {
                closed.push(id.clone());
            }
            inside
        });
        if !closed.is_empty() {
            log::debug!("dismissed popovers {closed:?}");
        }
        closed
    }
}
