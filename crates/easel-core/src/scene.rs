//! The scene store: the ordered item sequence.
//!
//! List order is z-order (last = topmost). Every mutation re-applies the
//! per-kind size clamps, so the geometry invariants hold no matter which
//! caller touched the item. Missing ids are no-ops, never errors.

use crate::id::ItemId;
use crate::model::CanvasItem;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Read-only full copy of the item sequence, as stored by history.
pub type Snapshot = Arc<[CanvasItem]>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scene {
    items: Vec<CanvasItem>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            items: snapshot.to_vec(),
        }
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&CanvasItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Topmost item.
    pub fn last(&self) -> Option<&CanvasItem> {
        self.items.last()
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::from(self.items.as_slice())
    }

    /// Replace the whole sequence with a snapshot's contents.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.items = snapshot.to_vec();
    }

    /// Append on top. Returns the item's id.
    pub fn add(&mut self, mut item: CanvasItem) -> ItemId {
        item.clamp_invariants();
        let id = item.id;
        self.items.push(item);
        id
    }

    /// Patch the item with `id` in place. Returns `false` if it does not exist.
    pub fn update(&mut self, id: ItemId, patch: impl FnOnce(&mut CanvasItem)) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                patch(item);
                item.clamp_invariants();
                true
            }
            None => false,
        }
    }

    /// Remove one item. The caller must drop it from any selection.
    pub fn remove(&mut self, id: ItemId) -> Option<CanvasItem> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Remove every item whose id is in `ids`. Returns how many went away.
    pub fn remove_all(&mut self, ids: &[ItemId]) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !ids.contains(&item.id));
        before - self.items.len()
    }

    /// Move every item in `ids` by `delta` scene units.
    pub fn translate(&mut self, ids: &[ItemId], delta: Vec2) {
        for item in self.items.iter_mut().filter(|item| ids.contains(&item.id)) {
            item.origin += delta;
        }
    }

    /// Clone every item in `ids` (in scene order) with a fresh id, shifted by
    /// `offset`, and append the clones after all originals. Returns the clone
    /// ids in the order they were appended.
    pub fn duplicate(&mut self, ids: &[ItemId], offset: Vec2) -> Vec<ItemId> {
        let clones: Vec<CanvasItem> = self
            .items
            .iter()
            .filter(|item| ids.contains(&item.id))
            .map(|item| item.duplicate(offset))
            .collect();
        let new_ids = clones.iter().map(|item| item.id).collect();
        self.items.extend(clones);
        new_ids
    }

    /// Topmost item containing `p` (scene units, inclusive bounds).
    pub fn item_at(&self, p: Point) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.contains(p))
            .map(|item| item.id)
    }

    /// Items whose center lies inside `rect` (inclusive), in scene order.
    pub fn centers_within(&self, rect: Rect) -> Vec<ItemId> {
        let rect = rect.abs();
        self.items
            .iter()
            .filter(|item| {
                let c = item.center();
                c.x >= rect.x0 && c.x <= rect.x1 && c.y >= rect.y0 && c.y <= rect.y1
            })
            .map(|item| item.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Color, ItemKind, ShapeItem, ShapeKind, Stroke};
    use kurbo::Size;
    use pretty_assertions::assert_eq;

    fn square(x: f64, y: f64, side: f64) -> CanvasItem {
        CanvasItem::new(
            ItemKind::Shape(ShapeItem {
                shape: ShapeKind::Rectangle,
                fill: Color::WHITE,
                stroke: Stroke::NONE,
                corner_radius: 0.0,
                text: None,
            }),
            Point::new(x, y),
            Size::new(side, side),
        )
    }

    #[test]
    fn add_appends_on_top() {
        let mut scene = Scene::new();
        let a = scene.add(square(0.0, 0.0, 100.0));
        let b = scene.add(square(50.0, 50.0, 100.0));
        assert_eq!(scene.last().map(|i| i.id), Some(b));
        assert_eq!(scene.item_at(Point::new(75.0, 75.0)), Some(b));
        assert_eq!(scene.item_at(Point::new(10.0, 10.0)), Some(a));
        assert_eq!(scene.item_at(Point::new(500.0, 500.0)), None);
    }

    #[test]
    fn update_missing_id_is_noop() {
        let mut scene = Scene::new();
        scene.add(square(0.0, 0.0, 100.0));
        let before = scene.clone();
        assert!(!scene.update(ItemId::new(), |item| item.origin.x = 99.0));
        assert_eq!(scene, before);
    }

    #[test]
    fn update_reclamps() {
        let mut scene = Scene::new();
        let id = scene.add(square(0.0, 0.0, 100.0));
        scene.update(id, |item| item.size = Size::new(-5.0, 3.0));
        assert_eq!(scene.get(id).unwrap().size, Size::new(20.0, 20.0));
    }

    #[test]
    fn opacity_is_capped_on_update_and_add() {
        let mut scene = Scene::new();
        let id = scene.add(square(0.0, 0.0, 100.0));
        scene.update(id, |item| item.opacity = 250);
        assert_eq!(scene.get(id).unwrap().opacity, 100);

        let mut raw = square(0.0, 0.0, 100.0);
        raw.opacity = 200;
        let id = scene.add(raw);
        assert_eq!(scene.get(id).unwrap().opacity, 100);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut scene = Scene::new();
        scene.add(square(0.0, 0.0, 100.0));
        assert!(scene.remove(ItemId::new()).is_none());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn duplicate_appends_after_originals_in_scene_order() {
        let mut scene = Scene::new();
        let a = scene.add(square(0.0, 0.0, 40.0));
        let _b = scene.add(square(100.0, 0.0, 40.0));
        let c = scene.add(square(200.0, 0.0, 40.0));

        // Selection order differs from scene order on purpose.
        let clones = scene.duplicate(&[c, a], Vec2::new(20.0, 20.0));
        assert_eq!(clones.len(), 2);
        assert_eq!(scene.len(), 5);
        assert_eq!(scene.items()[3].id, clones[0]);
        assert_eq!(scene.items()[3].origin, Point::new(20.0, 20.0));
        assert_eq!(scene.items()[4].origin, Point::new(220.0, 20.0));
        assert!(!clones.contains(&a) && !clones.contains(&c));
    }

    #[test]
    fn centers_within_uses_center_point() {
        let mut scene = Scene::new();
        let id = scene.add(square(0.0, 0.0, 100.0));
        // Covers the corner, not the center.
        assert!(scene.centers_within(Rect::new(-10.0, -10.0, 20.0, 20.0)).is_empty());
        assert_eq!(scene.centers_within(Rect::new(40.0, 40.0, 60.0, 60.0)), vec![id]);
    }

    #[test]
    fn snapshot_restore_roundtrip() {
        let mut scene = Scene::new();
        scene.add(square(0.0, 0.0, 100.0));
        let snap = scene.snapshot();
        scene.add(square(10.0, 10.0, 30.0));
        scene.restore(&snap);
        assert_eq!(scene.len(), 1);
        assert_eq!(Scene::from_snapshot(&snap), scene);
    }
}
