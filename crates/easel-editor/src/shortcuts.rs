//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `ShortcutAction`s. The editor
//! skips resolution entirely while a text field has input focus, so a
//! Backspace typed into a caption never deletes the selection.

use crate::input::Modifiers;

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    // ── Tool switching ──
    ToolSelect,
    ToolHand,
    ToolPen,
    /// Space held: temporary hand tool until release.
    HoldPan,

    // ── Edit ──
    Undo,
    Redo,
    Delete,
    Duplicate,

    // ── View ──
    ZoomIn,
    ZoomOut,
    ZoomToFit,

    // ── UI ──
    Deselect,
}

/// Resolves key events into shortcut actions.
///
/// Uses platform-aware modifier detection: on macOS `meta` is ⌘,
/// on other platforms `ctrl` serves the same role.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`, `"Delete"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
        let cmd = modifiers.command();

        // ── Modifier combos first (most specific) ──
        if cmd && modifiers.shift {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(ShortcutAction::Undo),
                "y" | "Y" => Some(ShortcutAction::Redo),
                "d" | "D" => Some(ShortcutAction::Duplicate),
                "=" | "+" => Some(ShortcutAction::ZoomIn),
                "-" => Some(ShortcutAction::ZoomOut),
                "0" => Some(ShortcutAction::ZoomToFit),
                _ => None,
            };
        }

        // ── Single keys ──
        match key {
            "v" | "V" => Some(ShortcutAction::ToolSelect),
            "h" | "H" => Some(ShortcutAction::ToolHand),
            "p" | "P" => Some(ShortcutAction::ToolPen),
            "Delete" | "Backspace" => Some(ShortcutAction::Delete),
            "Escape" => Some(ShortcutAction::Deselect),
            " " | "Space" => Some(ShortcutAction::HoldPan),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd() -> Modifiers {
        Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        }
    }

    fn cmd_shift() -> Modifiers {
        Modifiers {
            meta: true,
            shift: true,
            ..Modifiers::NONE
        }
    }

    #[test]
    fn resolve_tool_shortcuts() {
        assert_eq!(
            ShortcutMap::resolve("v", Modifiers::NONE),
            Some(ShortcutAction::ToolSelect)
        );
        assert_eq!(
            ShortcutMap::resolve("H", Modifiers::NONE),
            Some(ShortcutAction::ToolHand)
        );
        assert_eq!(
            ShortcutMap::resolve("p", Modifiers::NONE),
            Some(ShortcutAction::ToolPen)
        );
    }

    #[test]
    fn resolve_undo_redo() {
        assert_eq!(ShortcutMap::resolve("z", cmd()), Some(ShortcutAction::Undo));
        assert_eq!(ShortcutMap::resolve("Z", cmd_shift()), Some(ShortcutAction::Redo));
        assert_eq!(ShortcutMap::resolve("y", cmd()), Some(ShortcutAction::Redo));
    }

    #[test]
    fn resolve_delete() {
        assert_eq!(
            ShortcutMap::resolve("Delete", Modifiers::NONE),
            Some(ShortcutAction::Delete)
        );
        assert_eq!(
            ShortcutMap::resolve("Backspace", Modifiers::NONE),
            Some(ShortcutAction::Delete)
        );
    }

    #[test]
    fn resolve_view() {
        assert_eq!(ShortcutMap::resolve("=", cmd()), Some(ShortcutAction::ZoomIn));
        assert_eq!(ShortcutMap::resolve("-", cmd()), Some(ShortcutAction::ZoomOut));
        assert_eq!(ShortcutMap::resolve("0", cmd()), Some(ShortcutAction::ZoomToFit));
    }

    #[test]
    fn letters_need_no_modifier() {
        // Ctrl+V is a paste in the host, not a tool switch.
        assert_eq!(ShortcutMap::resolve("v", cmd()), None);
        assert_eq!(ShortcutMap::resolve("q", Modifiers::NONE), None);
    }

    #[test]
    fn resolve_space_and_escape() {
        assert_eq!(
            ShortcutMap::resolve(" ", Modifiers::NONE),
            Some(ShortcutAction::HoldPan)
        );
        assert_eq!(
            ShortcutMap::resolve("Escape", Modifiers::NONE),
            Some(ShortcutAction::Deselect)
        );
    }
}
