//! Event scripts: a JSON array of steps replayed through an [`Editor`].
//!
//! A step is either a raw input event (`{"step": "input", "event": "pointer_down", ...}`)
//! or one of the commands a host UI would issue from buttons and panels.

use easel_core::{CanvasItem, ImageSource, ItemKind, Point, Rect, Size, StyleEdit};
use easel_editor::{
    ArtStyle, AspectRatio, Editor, GeneratedImage, GenerationError, InputEvent, Placement,
    Tool, UploadedImage,
};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Input(InputEvent),
    SetTool {
        tool: Tool,
    },
    ArmPlacement {
        placement: Placement,
    },
    AddItem {
        item: ItemKind,
        origin: Point,
        size: Size,
        #[serde(default)]
        opacity: Option<i64>,
    },
    /// Style edit on every selected item.
    Style {
        edit: StyleEdit,
    },
    /// Style edit on the item at `index` in stacking order.
    StyleLayer {
        index: usize,
        edit: StyleEdit,
    },
    SelectLayer {
        index: usize,
    },
    DeleteLayer {
        index: usize,
    },
    Upload {
        uri: String,
        natural: Size,
    },
    /// Request a generation and deliver its outcome right away. With no
    /// `png_base64` the request fails, with `status` if given.
    Generate {
        prompt: String,
        #[serde(default)]
        style: ArtStyle,
        #[serde(default)]
        aspect: AspectRatio,
        #[serde(default)]
        png_base64: Option<String>,
        #[serde(default)]
        status: Option<u16>,
    },
    TextDraft {
        text: String,
    },
    Blur,
    HostFocus {
        focused: bool,
    },
    OpenPopover {
        id: String,
        bounds: Rect,
    },
    Undo,
    Redo,
    Delete,
    Duplicate,
    ZoomIn,
    ZoomOut,
    ZoomToFit,
    ResizeContainer {
        size: Size,
    },
}

/// Parse a script document.
pub fn parse(json: &str) -> serde_json::Result<Vec<Step>> {
    serde_json::from_str(json)
}

/// Run every step in order. Steps that do not apply are skipped with a log line.
pub fn replay(editor: &mut Editor, steps: &[Step]) {
    for (n, step) in steps.iter().enumerate() {
        log::trace!("step {n}: {step:?}");
        apply(editor, step);
    }
}

fn apply(editor: &mut Editor, step: &Step) {
    match step {
        Step::Input(event) => editor.handle(event),
        Step::SetTool { tool } => editor.set_tool(*tool),
        Step::ArmPlacement { placement } => editor.arm_placement(*placement),
        Step::AddItem {
            item,
            origin,
            size,
            opacity,
        } => {
            let mut new = CanvasItem::new(item.clone(), *origin, *size);
            if let Some(opacity) = opacity {
                new.set_opacity(*opacity);
            }
            editor.add_item(new);
        }
        Step::Style { edit } => {
            if !editor.apply_style_to_selection(edit) {
                log::info!("style edit applied to nothing");
            }
        }
        Step::StyleLayer { index, edit } => match layer(editor, *index) {
            Some(id) => {
                editor.apply_style(id, edit);
            }
            None => log::warn!("no layer at index {index}"),
        },
        Step::SelectLayer { index } => match layer(editor, *index) {
            Some(id) => {
                editor.select_layer(id);
            }
            None => log::warn!("no layer at index {index}"),
        },
        Step::DeleteLayer { index } => match layer(editor, *index) {
            Some(id) => {
                editor.delete_item(id);
            }
            None => log::warn!("no layer at index {index}"),
        },
        Step::Upload { uri, natural } => {
            editor.place_upload(UploadedImage {
                source: ImageSource::from_uri(uri.as_str()),
                natural: *natural,
            });
        }
        Step::Generate {
            prompt,
            style,
            aspect,
            png_base64,
            status,
        } => {
            let Some(pending) = editor.request_generation(prompt, *style, *aspect) else {
                log::warn!("blank generation prompt skipped");
                return;
            };
            let outcome = match (png_base64, status) {
                (Some(data), _) => Ok(GeneratedImage::from_base64_png(data)),
                (None, Some(code)) => Err(GenerationError::Rejected(*code)),
                (None, None) => Err(GenerationError::EmptyResponse),
            };
            editor.complete_generation(pending, outcome);
        }
        Step::TextDraft { text } => {
            if !editor.set_text_draft(text) {
                log::warn!("text draft with no text edit in progress");
            }
        }
        Step::Blur => {
            editor.end_text_edit();
        }
        Step::HostFocus { focused } => editor.set_input_focus(*focused),
        Step::OpenPopover { id, bounds } => editor.popovers_mut().open(id.as_str(), *bounds),
        Step::Undo => {
            editor.undo();
        }
        Step::Redo => {
            editor.redo();
        }
        Step::Delete => {
            editor.delete_selected();
        }
        Step::Duplicate => {
            editor.duplicate_selected();
        }
        Step::ZoomIn => editor.zoom_in(),
        Step::ZoomOut => editor.zoom_out(),
        Step::ZoomToFit => editor.zoom_to_fit(),
        Step::ResizeContainer { size } => editor.resize_container(*size),
    }
}

fn layer(editor: &Editor, index: usize) -> Option<easel_core::ItemId> {
    editor.scene().items().get(index).map(|item| item.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::{ShapeKind, Vec2};
    use easel_editor::Mode;
    use pretty_assertions::assert_eq;

    const SCRIPT: &str = r##"[
        {"step": "arm_placement", "placement": {"kind": "shape", "shape": "star"}},
        {"step": "input", "event": "pointer_down",
         "position": {"x": 400.0, "y": 300.0}, "button": "primary",
         "modifiers": {}},
        {"step": "input", "event": "pointer_up", "position": {"x": 400.0, "y": 300.0}},
        {"step": "input", "event": "pointer_down",
         "position": {"x": 400.0, "y": 300.0}, "modifiers": {}},
        {"step": "input", "event": "pointer_move", "position": {"x": 450.0, "y": 320.0}},
        {"step": "input", "event": "pointer_up", "position": {"x": 450.0, "y": 320.0}},
        {"step": "style", "edit": {"field": "opacity", "value": 50}}
    ]"##;

    #[test]
    fn parses_inputs_and_commands() {
        let steps = parse(SCRIPT).unwrap();
        assert_eq!(steps.len(), 7);
        assert_eq!(
            steps[0],
            Step::ArmPlacement {
                placement: Placement::Shape(ShapeKind::Star)
            }
        );
        match &steps[4] {
            Step::Input(InputEvent::PointerMove { position }) => {
                assert_eq!(*position, Point::new(450.0, 320.0));
            }
            other => panic!("expected pointer move, got {other:?}"),
        }
    }

    #[test]
    fn replay_places_drags_and_styles() {
        let mut editor = Editor::default();
        replay(&mut editor, &parse(SCRIPT).unwrap());

        assert_eq!(editor.mode(), Mode::Idle);
        assert_eq!(editor.scene().len(), 1);
        let item = &editor.scene().items()[0];
        // Placed centered on (400,300), then dragged by (50,20).
        assert_eq!(item.center(), Point::new(450.0, 320.0));
        assert_eq!(item.opacity, 50);
        // place, drag, style
        assert_eq!(editor.history().step(), 3);
    }

    #[test]
    fn failed_generation_changes_nothing() {
        let mut editor = Editor::default();
        let steps = parse(
            r#"[{"step": "generate", "prompt": "a fox", "aspect": "16:9", "status": 500}]"#,
        )
        .unwrap();
        replay(&mut editor, &steps);
        assert!(editor.scene().is_empty());
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn layer_steps_with_bad_index_are_skipped() {
        let mut editor = Editor::default();
        replay(
            &mut editor,
            &[Step::SelectLayer { index: 3 }, Step::DeleteLayer { index: 0 }],
        );
        assert!(editor.selection().is_empty());
        assert_eq!(editor.history().len(), 1);
        assert_eq!(editor.viewport().pan(), Vec2::ZERO);
    }
}
