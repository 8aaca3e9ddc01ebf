//! The interaction controller.
//!
//! `Editor` owns the scene, the selection, the viewport and the history, and
//! turns input events into gestures:
//!
//! ```text
//! Idle ──down (hand / middle)──▶ Panning    ──up──▶ Idle
//! Idle ──down (pen)───────────▶ DrawPath   ──up──▶ Idle  (+ Path item, commit)
//! Idle ──down (select, handle)▶ ResizeItem ──up──▶ Idle  (commit if moved)
//! Idle ──down (select, item)──▶ DragItems  ──up──▶ Idle  (commit if moved)
//! Idle ──down (select, empty)─▶ Marquee    ──up──▶ Idle  (additive select)
//! PlaceNew ──down─────────────▶ Idle                     (+ item, commit)
//! Idle ──double-click (text)──▶ EditText   ──blur──▶ Idle (commit)
//! ```
//!
//! Pointer moves only touch live state. Each gesture commits at most once,
//! when it ends. A cancelled pointer stream or a lost window focus ends the
//! gesture exactly like a release.

use crate::config::EditorConfig;
use crate::gesture::{Gesture, Mode};
use crate::hit::{HitTarget, hit_test};
use crate::history::HistoryStack;
use crate::import::{
    GeneratedImage, GenerationRequest, PendingGeneration, UploadedImage, upload_size,
};
use crate::input::{InputEvent, KeyEvent, Modifiers, PointerButton};
use crate::popover::{PopoverId, Popovers};
use crate::shortcuts::{ShortcutAction, ShortcutMap};
use crate::surface::{SceneSurface, TextDraft};
use crate::tools::{Placement, Tool};
use crate::{ArtStyle, AspectRatio, GenerationError};
use easel_core::{
    CanvasItem, ImageItem, ItemId, ItemKind, PathCapture, PathItem, Point, Rect, Scene,
    Selection, Size, StyleEdit, Vec2, Viewport, resize,
};

const UPLOAD_LABEL: &str = "Uploaded Image";

pub struct Editor {
    config: EditorConfig,
    scene: Scene,
    selection: Selection,
    viewport: Viewport,
    history: HistoryStack,
    tool: Tool,
    /// Tool to restore when a Space hold ends.
    held_tool: Option<Tool>,
    gesture: Option<Gesture>,
    /// A host text field (outside the canvas) has keyboard focus.
    input_focus: bool,
    popovers: Popovers,
    next_ticket: u64,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        let scene = Scene::new();
        let history = HistoryStack::new(scene.snapshot(), config.history_depth);
        Self {
            viewport: Viewport::new(config.container),
            config,
            scene,
            selection: Selection::new(),
            history,
            tool: Tool::Select,
            held_tool: None,
            gesture: None,
            input_focus: false,
            popovers: Popovers::new(),
            next_ticket: 1,
        }
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    pub fn popovers(&self) -> &Popovers {
        &self.popovers
    }

    pub fn popovers_mut(&mut self) -> &mut Popovers {
        &mut self.popovers
    }

    pub fn mode(&self) -> Mode {
        match &self.gesture {
            Some(gesture) => gesture.mode(),
            None if matches!(self.tool, Tool::Place(_)) => Mode::PlaceNew,
            None => Mode::Idle,
        }
    }

    pub fn is_editing_text(&self) -> bool {
        matches!(self.gesture, Some(Gesture::EditText { .. }))
    }

    /// Snapshot of the whole externally visible state.
    pub fn surface(&self) -> SceneSurface {
        SceneSurface {
            items: self.scene.items().to_vec(),
            selection: self.selection.as_slice().to_vec(),
            zoom: self.viewport.zoom(),
            pan: self.viewport.pan(),
            history_step: self.history.step(),
            history_len: self.history.len(),
            mode: self.mode(),
            tool: self.tool,
            marquee: self.gesture.as_ref().and_then(Gesture::marquee_rect),
            editing: match &self.gesture {
                Some(Gesture::EditText { id, draft }) => Some(TextDraft {
                    id: *id,
                    draft: draft.clone(),
                }),
                _ => None,
            },
        }
    }

    // ─── Event dispatch ──────────────────────────────────────────────────

    pub fn handle(&mut self, event: &InputEvent) {
        match event {
            InputEvent::PointerDown {
                position,
                button,
                modifiers,
            } => {
                self.pointer_down(*position, *button, *modifiers);
            }
            InputEvent::PointerMove { position } => self.pointer_move(*position),
            InputEvent::PointerUp { position } => self.pointer_up(*position),
            InputEvent::PointerCancel => self.pointer_cancel(),
            InputEvent::DoubleClick { position } => {
                self.double_click(*position);
            }
            InputEvent::Wheel {
                position,
                delta,
                modifiers,
            } => self.wheel(*position, *delta, *modifiers),
            InputEvent::KeyDown(key) => {
                self.key_down(key);
            }
            InputEvent::KeyUp(key) => {
                self.key_up(key);
            }
            InputEvent::FocusLost => self.focus_lost(),
        }
    }

    // ─── Pointer ─────────────────────────────────────────────────────────

    /// Start a gesture. Returns the popovers this click dismissed.
    pub fn pointer_down(
        &mut self,
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> Vec<PopoverId> {
        let dismissed = self.popovers.dismiss_outside(position);

        // Clicking the canvas blurs a text field being edited.
        self.end_text_edit();
        // A release we never saw: finish that gesture first.
        self.finish_gesture(None);

        if button == PointerButton::Middle || self.tool == Tool::Hand {
            self.begin(Gesture::Panning { last: position });
            return dismissed;
        }
        if button != PointerButton::Primary {
            return dismissed;
        }

        let scene_pt = self.viewport.screen_to_scene(position);
        match self.tool {
            Tool::Hand => {}
            Tool::Pen => self.begin(Gesture::DrawPath(PathCapture::new(scene_pt))),
            Tool::Place(placement) => self.place(placement, scene_pt),
            Tool::Select => {
                let target = hit_test(
                    &self.scene,
                    &self.selection,
                    &self.viewport,
                    position,
                    self.config.handle_tolerance,
                );
                match target {
                    HitTarget::Handle { id, handle } => {
                        if let Some(item) = self.scene.get(id) {
                            let start = item.bounds();
                            self.begin(Gesture::ResizeItem {
                                id,
                                handle,
                                start,
                                pointer_start: position,
                                moved: false,
                            });
                        }
                    }
                    HitTarget::Item(id) => {
                        self.selection.click(id, modifiers.extends_selection());
                        self.begin(Gesture::DragItems {
                            last: position,
                            moved: false,
                        });
                    }
                    HitTarget::Canvas => {
                        if !modifiers.extends_selection() {
                            self.selection.clear();
                        }
                        self.begin(Gesture::Marquee {
                            anchor: scene_pt,
                            current: scene_pt,
                        });
                    }
                }
            }
        }
        dismissed
    }

    pub fn pointer_move(&mut self, position: Point) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        match gesture {
            Gesture::Panning { last } => {
                self.viewport.pan_by(position - *last);
                *last = position;
            }
            Gesture::Marquee { current, .. } => {
                *current = self.viewport.screen_to_scene(position);
            }
            Gesture::DragItems { last, moved } => {
                let delta = self.viewport.screen_delta_to_scene(position - *last);
                *last = position;
                if delta != Vec2::ZERO && !self.selection.is_empty() {
                    self.scene.translate(self.selection.as_slice(), delta);
                    *moved = true;
                }
            }
            Gesture::ResizeItem {
                id,
                handle,
                start,
                pointer_start,
                moved,
            } => {
                let Some(item) = self.scene.get(*id) else {
                    return;
                };
                let rect = resize(
                    &item.kind,
                    *handle,
                    *start,
                    position - *pointer_start,
                    self.viewport.zoom(),
                );
                self.scene.update(*id, |item| item.set_bounds(rect));
                if position != *pointer_start {
                    *moved = true;
                }
            }
            Gesture::DrawPath(capture) => {
                capture.push(self.viewport.screen_to_scene(position));
            }
            Gesture::EditText { .. } => {}
        }
    }

    /// Release, inside or outside the canvas.
    pub fn pointer_up(&mut self, position: Point) {
        self.finish_gesture(Some(position));
    }

    pub fn pointer_cancel(&mut self) {
        self.finish_gesture(None);
    }

    /// The window lost focus: finish whatever was in progress, including a
    /// text edit, and drop a Space hold whose release we will never see.
    pub fn focus_lost(&mut self) {
        self.finish_gesture(None);
        self.end_text_edit();
        if let Some(prev) = self.held_tool.take()
            && self.tool == Tool::Hand
        {
            self.tool = prev;
        }
    }

    /// Start editing a text item. Returns `false` if nothing editable is there.
    pub fn double_click(&mut self, position: Point) -> bool {
        if self.tool != Tool::Select {
            return false;
        }
        self.finish_gesture(None);
        let Some(id) = self.scene.item_at(self.viewport.screen_to_scene(position)) else {
            return false;
        };
        let Some(ItemKind::Text(text)) = self.scene.get(id).map(|item| &item.kind) else {
            return false;
        };
        let draft = text.run.content.clone();
        self.end_text_edit();
        self.selection.select_only(id);
        self.begin(Gesture::EditText { id, draft });
        true
    }

    pub fn wheel(&mut self, position: Point, delta: Vec2, modifiers: Modifiers) {
        if modifiers.command() {
            // Horizontal scroll carries no zoom direction.
            if delta.y == 0.0 || delta.y.is_nan() {
                return;
            }
            let factor = if delta.y < 0.0 {
                self.config.zoom_in_factor
            } else {
                self.config.zoom_out_factor
            };
            self.viewport.set_zoom(factor, Some(position));
        } else {
            self.viewport.pan_by(-delta);
        }
    }

    fn begin(&mut self, gesture: Gesture) {
        log::debug!("gesture start: {:?}", gesture.mode());
        self.gesture = Some(gesture);
    }

    /// End the current pointer gesture. `release` is the pointer-up position,
    /// or `None` when the stream was cancelled. Text editing is left alone.
    fn finish_gesture(&mut self, release: Option<Point>) {
        let Some(gesture) = self.gesture.take_if(|g| g.is_pointer_driven()) else {
            return;
        };
        log::debug!("gesture end: {:?}", gesture.mode());
        match gesture {
            Gesture::Panning { .. } => {}
            Gesture::Marquee { anchor, current } => {
                let end = release.map_or(current, |p| self.viewport.screen_to_scene(p));
                let hits = self.scene.centers_within(Rect::from_points(anchor, end));
                self.selection.extend(hits);
            }
            Gesture::DragItems { moved, .. } | Gesture::ResizeItem { moved, .. } => {
                if moved {
                    self.commit();
                }
            }
            Gesture::DrawPath(capture) => match capture.finish() {
                Some(path) => {
                    let item = CanvasItem::new(
                        ItemKind::Path(PathItem {
                            points: path.points,
                            stroke: self.config.pen_stroke(),
                        }),
                        path.bounds.origin(),
                        path.bounds.size(),
                    );
                    self.scene.add(item);
                    self.commit();
                }
                None => log::debug!("path discarded: too few samples"),
            },
            // Filtered out by `take_if` above.
            Gesture::EditText { .. } => {}
        }
    }

    /// Finish any gesture before a command that replaces or edits the scene.
    fn settle(&mut self) {
        self.finish_gesture(None);
        self.end_text_edit();
    }

    fn commit(&mut self) {
        self.history.commit(self.scene.snapshot());
    }

    // ─── Keyboard ────────────────────────────────────────────────────────

    /// Returns `true` when the key was consumed as a shortcut.
    pub fn key_down(&mut self, key: &KeyEvent) -> bool {
        if self.input_focus || self.is_editing_text() {
            return false;
        }
        let Some(action) = ShortcutMap::resolve(&key.key, key.modifiers) else {
            return false;
        };
        log::trace!("shortcut {action:?}");
        match action {
            ShortcutAction::HoldPan => {
                if key.repeat || self.tool == Tool::Hand {
                    return false;
                }
                self.held_tool = Some(self.tool);
                self.tool = Tool::Hand;
            }
            ShortcutAction::ToolSelect => self.set_tool(Tool::Select),
            ShortcutAction::ToolHand => self.set_tool(Tool::Hand),
            ShortcutAction::ToolPen => self.set_tool(Tool::Pen),
            ShortcutAction::Undo => {
                self.undo();
            }
            ShortcutAction::Redo => {
                self.redo();
            }
            ShortcutAction::Delete => {
                self.delete_selected();
            }
            ShortcutAction::Duplicate => {
                self.duplicate_selected();
            }
            ShortcutAction::ZoomIn => self.zoom_in(),
            ShortcutAction::ZoomOut => self.zoom_out(),
            ShortcutAction::ZoomToFit => self.zoom_to_fit(),
            ShortcutAction::Deselect => self.selection.clear(),
        }
        true
    }

    /// Releasing Space restores the tool that was active before the hold.
    pub fn key_up(&mut self, key: &KeyEvent) -> bool {
        if !key.is_space() {
            return false;
        }
        match self.held_tool.take() {
            Some(prev) if self.tool == Tool::Hand => {
                self.tool = prev;
                true
            }
            _ => false,
        }
    }

    /// Report whether a host text field has keyboard focus.
    pub fn set_input_focus(&mut self, focused: bool) {
        self.input_focus = focused;
    }

    // ─── Tools ───────────────────────────────────────────────────────────

    /// Explicit tool switch. Clears the selection.
    pub fn set_tool(&mut self, tool: Tool) {
        self.settle();
        self.selection.clear();
        self.held_tool = None;
        self.tool = tool;
        log::debug!("tool: {}", tool.name());
    }

    /// Arm a placement: the next primary click creates the item.
    pub fn arm_placement(&mut self, placement: Placement) {
        self.set_tool(Tool::Place(placement));
    }

    fn place(&mut self, placement: Placement, center: Point) {
        let id = self.scene.add(placement.instantiate(center));
        log::debug!("placed {id:?} at {center:?}");
        self.commit();
        self.tool = Tool::Select;
    }

    // ─── Text editing ────────────────────────────────────────────────────

    /// Replace the live draft of the text being edited.
    pub fn set_text_draft(&mut self, text: &str) -> bool {
        match &mut self.gesture {
            Some(Gesture::EditText { draft, .. }) => {
                text.clone_into(draft);
                true
            }
            _ => false,
        }
    }

    /// Blur: write the draft into the item and commit.
    pub fn end_text_edit(&mut self) -> bool {
        match self.gesture.take() {
            Some(Gesture::EditText { id, draft }) => {
                self.scene.update(id, |item| {
                    if let ItemKind::Text(text) = &mut item.kind {
                        text.run.content = draft;
                    }
                });
                self.commit();
                log::debug!("text edit committed for {id:?}");
                true
            }
            other => {
                self.gesture = other;
                false
            }
        }
    }

    // ─── Commands ────────────────────────────────────────────────────────

    /// Insert a ready-made item on top (paste, scripted setup). One commit.
    pub fn add_item(&mut self, item: CanvasItem) -> ItemId {
        self.settle();
        let id = self.scene.add(item);
        self.commit();
        id
    }

    pub fn undo(&mut self) -> bool {
        self.settle();
        match self.history.undo() {
            Some(snapshot) => {
                self.scene.restore(snapshot);
                self.selection.clear();
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        self.settle();
        match self.history.redo() {
            Some(snapshot) => {
                self.scene.restore(snapshot);
                self.selection.clear();
                true
            }
            None => false,
        }
    }

    pub fn delete_selected(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.settle();
        let removed = self.scene.remove_all(self.selection.as_slice());
        self.selection.clear();
        if removed > 0 {
            self.commit();
        }
        removed > 0
    }

    /// Layers panel delete.
    pub fn delete_item(&mut self, id: ItemId) -> bool {
        self.settle();
        if self.scene.remove(id).is_none() {
            return false;
        }
        self.selection.remove(id);
        self.commit();
        true
    }

    /// Layers panel click.
    pub fn select_layer(&mut self, id: ItemId) -> bool {
        if !self.scene.contains(id) {
            return false;
        }
        self.selection.select_only(id);
        true
    }

    /// Clone the selection; the clones become the new selection.
    pub fn duplicate_selected(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.settle();
        let offset = Vec2::new(self.config.duplicate_offset, self.config.duplicate_offset);
        let clones = self.scene.duplicate(self.selection.as_slice(), offset);
        if clones.is_empty() {
            return false;
        }
        self.selection.replace(clones);
        self.commit();
        true
    }

    /// Apply one property edit to one item; commits when it applied.
    pub fn apply_style(&mut self, id: ItemId, edit: &StyleEdit) -> bool {
        self.settle();
        let mut applied = false;
        self.scene.update(id, |item| applied = item.apply_style(edit));
        if applied {
            self.commit();
        }
        applied
    }

    /// Apply one property edit to every selected item, as one undo step.
    pub fn apply_style_to_selection(&mut self, edit: &StyleEdit) -> bool {
        self.settle();
        let mut applied = false;
        for id in self.selection.as_slice().to_vec() {
            self.scene.update(id, |item| applied |= item.apply_style(edit));
        }
        if applied {
            self.commit();
        }
        applied
    }

    // ─── View ────────────────────────────────────────────────────────────

    pub fn zoom_in(&mut self) {
        self.viewport.set_zoom(self.config.zoom_in_factor, None);
    }

    pub fn zoom_out(&mut self) {
        self.viewport.set_zoom(self.config.zoom_out_factor, None);
    }

    pub fn zoom_to_fit(&mut self) {
        self.viewport.zoom_to_fit(self.scene.items());
    }

    pub fn resize_container(&mut self, container: Size) {
        self.viewport.set_container(container);
    }

    // ─── Collaborators ───────────────────────────────────────────────────

    /// Place a decoded upload at the viewport center.
    /// A gesture in progress keeps running.
    pub fn place_upload(&mut self, upload: UploadedImage) -> ItemId {
        let size = upload_size(upload.natural, self.config.placement_baseline);
        let origin = self.viewport.centered_origin(size);
        let item = CanvasItem::new(
            ItemKind::Image(ImageItem {
                source: upload.source,
                label: UPLOAD_LABEL.into(),
            }),
            origin,
            size,
        );
        let id = self.scene.add(item);
        self.commit();
        self.held_tool = None;
        self.tool = Tool::Select;
        log::info!("placed upload {id:?} ({}×{})", size.width, size.height);
        id
    }

    /// Shape a generation request. Blank prompts produce no ticket.
    pub fn request_generation(
        &mut self,
        prompt: &str,
        style: ArtStyle,
        aspect: AspectRatio,
    ) -> Option<PendingGeneration> {
        let request = GenerationRequest::new(prompt, style, aspect)?;
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        log::debug!("generation #{ticket} requested: {:?}", request.prompt);
        Some(PendingGeneration { ticket, request })
    }

    /// Deliver a generation outcome. On success the image is placed to the
    /// right of the topmost item (or at the view center on an empty scene),
    /// committed, and scrolled into view. On failure nothing changes.
    pub fn complete_generation(
        &mut self,
        pending: PendingGeneration,
        outcome: Result<GeneratedImage, GenerationError>,
    ) -> Option<ItemId> {
        let image = match outcome {
            Ok(image) => image,
            Err(err) => {
                log::warn!("generation #{} failed: {err}", pending.ticket);
                return None;
            }
        };
        // The user may be mid-gesture; append without ending it.
        let size = pending.request.aspect.size(self.config.placement_baseline);
        let origin = match self.scene.last() {
            Some(last) => Point::new(
                last.origin.x + last.size.width + self.config.generation_gap,
                last.origin.y,
            ),
            None => self.viewport.centered_origin(size),
        };
        let item = CanvasItem::new(
            ItemKind::Image(ImageItem {
                source: image.source,
                label: pending.request.prompt,
            }),
            origin,
            size,
        );
        let center = item.center();
        let id = self.scene.add(item);
        self.commit();
        self.viewport.center_on(center);
        log::info!("generation #{} placed as {id:?}", pending.ticket);
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_core::ShapeKind;

    fn down(editor: &mut Editor, x: f64, y: f64) {
        editor.pointer_down(Point::new(x, y), PointerButton::Primary, Modifiers::NONE);
    }

    #[test]
    fn starts_idle_with_one_snapshot() {
        let editor = Editor::default();
        assert_eq!(editor.mode(), Mode::Idle);
        assert_eq!(editor.history().len(), 1);
        assert_eq!(editor.history().step(), 0);
    }

    #[test]
    fn armed_placement_reports_place_new() {
        let mut editor = Editor::default();
        editor.arm_placement(Placement::Shape(ShapeKind::Circle));
        assert_eq!(editor.mode(), Mode::PlaceNew);
        down(&mut editor, 400.0, 300.0);
        assert_eq!(editor.mode(), Mode::Idle);
        assert_eq!(editor.tool(), Tool::Select);
        assert_eq!(editor.scene().len(), 1);
        assert_eq!(editor.history().step(), 1);
    }

    #[test]
    fn middle_button_pans_with_any_tool() {
        let mut editor = Editor::default();
        editor.set_tool(Tool::Pen);
        editor.pointer_down(Point::new(10.0, 10.0), PointerButton::Middle, Modifiers::NONE);
        assert_eq!(editor.mode(), Mode::Panning);
        editor.pointer_move(Point::new(40.0, 0.0));
        editor.pointer_up(Point::new(40.0, 0.0));
        assert_eq!(editor.viewport().pan(), Vec2::new(30.0, -10.0));
        assert_eq!(editor.mode(), Mode::Idle);
        assert_eq!(editor.history().len(), 1);
    }

    #[test]
    fn secondary_button_does_nothing() {
        let mut editor = Editor::default();
        editor.pointer_down(Point::new(10.0, 10.0), PointerButton::Secondary, Modifiers::NONE);
        assert_eq!(editor.mode(), Mode::Idle);
    }

    #[test]
    fn wheel_pans_without_modifier() {
        let mut editor = Editor::default();
        editor.wheel(Point::ZERO, Vec2::new(5.0, 20.0), Modifiers::NONE);
        assert_eq!(editor.viewport().pan(), Vec2::new(-5.0, -20.0));
        assert_eq!(editor.viewport().zoom(), 100.0);
    }

    #[test]
    fn ctrl_wheel_zooms_at_pointer() {
        let mut editor = Editor::default();
        let anchor = Point::new(300.0, 200.0);
        let before = editor.viewport().screen_to_scene(anchor);
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        editor.wheel(anchor, Vec2::new(0.0, -1.0), ctrl);
        assert!((editor.viewport().zoom() - 110.0).abs() < 1e-9);
        let after = editor.viewport().screen_to_scene(anchor);
        assert!((before - after).hypot() < 1e-9);
        editor.wheel(anchor, Vec2::new(0.0, 1.0), ctrl);
        assert!((editor.viewport().zoom() - 99.0).abs() < 1e-9);
    }

    #[test]
    fn ctrl_wheel_without_vertical_delta_is_ignored() {
        let mut editor = Editor::default();
        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        editor.wheel(Point::new(300.0, 200.0), Vec2::new(40.0, 0.0), ctrl);
        assert_eq!(editor.viewport().zoom(), 100.0);
        assert_eq!(editor.viewport().pan(), Vec2::ZERO);
    }

    #[test]
    fn pointer_cancel_leaves_text_edit_running() {
        let mut editor = Editor::default();
        let id = editor.add_item(Placement::Text.instantiate(Point::new(200.0, 200.0)));
        assert!(editor.double_click(Point::new(200.0, 200.0)));
        editor.pointer_cancel();
        assert!(editor.is_editing_text());
        assert_eq!(editor.surface().editing.map(|e| e.id), Some(id));
    }

    #[test]
    fn popovers_close_on_outside_click() {
        let mut editor = Editor::default();
        editor
            .popovers_mut()
            .open("shape-menu", Rect::new(0.0, 0.0, 50.0, 50.0));
        let closed =
            editor.pointer_down(Point::new(400.0, 400.0), PointerButton::Primary, Modifiers::NONE);
        assert_eq!(closed, vec![PopoverId::from("shape-menu")]);
        assert_eq!(editor.popovers().ids().count(), 0);
    }
}
