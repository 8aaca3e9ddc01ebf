//! Linear undo/redo over full scene snapshots.
//!
//! The stack always holds at least one snapshot (the initial scene) and a
//! step index into it. Gestures commit once, at their end, so one user action
//! is one snapshot no matter how many pointer samples it took.
//!
//! Committing after an undo drops the redo branch.

use easel_core::Snapshot;

#[derive(Debug, Clone)]
pub struct HistoryStack {
    snapshots: Vec<Snapshot>,
    step: usize,
    /// Maximum number of snapshots kept; `None` = unbounded.
    max_depth: Option<usize>,
}

impl HistoryStack {
    /// Start with `initial` as the only snapshot, at step 0.
    pub fn new(initial: Snapshot, max_depth: Option<usize>) -> Self {
        Self {
            snapshots: vec![initial],
            step: 0,
            max_depth: max_depth.map(|d| d.max(1)),
        }
    }

    /// Truncate after the current step, append, and move to the new snapshot.
    pub fn commit(&mut self, snapshot: Snapshot) {
        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(snapshot);
        if let Some(max) = self.max_depth
            && self.snapshots.len() > max
        {
            let excess = self.snapshots.len() - max;
            self.snapshots.drain(..excess);
        }
        self.step = self.snapshots.len() - 1;
        log::debug!("history commit: step {} of {}", self.step, self.snapshots.len());
    }

    /// Step back. Returns the snapshot to restore, or `None` at the start.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.step == 0 {
            return None;
        }
        self.step -= 1;
        self.snapshots.get(self.step)
    }

    /// Step forward. Returns the snapshot to restore, or `None` at the end.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.step + 1 >= self.snapshots.len() {
            return None;
        }
        self.step += 1;
        self.snapshots.get(self.step)
    }

    pub fn can_undo(&self) -> bool {
        self.step > 0
    }

    pub fn can_redo(&self) -> bool {
        self.step + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.step]
    }
}
