//! Selected item ids and the click/marquee selection rules.

use crate::id::ItemId;
use crate::scene::Scene;
use smallvec::SmallVec;

/// Ordered set of selected ids. Insertion order is kept so hosts can show a
/// stable "primary" selection (the first member).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: SmallVec<[ItemId; 4]>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.ids.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn first(&self) -> Option<ItemId> {
        self.ids.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.ids.iter().copied()
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.ids
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Replace the selection with exactly `id`.
    pub fn select_only(&mut self, id: ItemId) {
        self.ids.clear();
        self.ids.push(id);
    }

    /// Replace the selection with `ids` (duplicates dropped).
    pub fn replace(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        self.ids.clear();
        self.extend(ids);
    }

    /// Add if absent, remove if present.
    pub fn toggle(&mut self, id: ItemId) {
        if let Some(pos) = self.ids.iter().position(|s| *s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    /// Add every id not already selected. Marquee selection goes through here.
    pub fn extend(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    pub fn remove(&mut self, id: ItemId) {
        self.ids.retain(|s| *s != id);
    }

    /// Click on an item. With `modifier` held membership toggles; otherwise
    /// the selection always ends as exactly `{id}`.
    pub fn click(&mut self, id: ItemId, modifier: bool) {
        if modifier {
            self.toggle(id);
        } else {
            self.select_only(id);
        }
    }

    /// Drop ids that no longer exist in `scene`.
    pub fn retain_existing(&mut self, scene: &Scene) {
        self.ids.retain(|id| scene.contains(*id));
    }
}
