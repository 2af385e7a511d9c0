//! Bounded linear undo/redo history.

use super::Scene;
use crate::model::DrawingObject;

/// Linear stack of shape-list snapshots.
///
/// Saving truncates everything after the current index before appending.
/// When the cap is exceeded the oldest snapshot is dropped.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Vec<DrawingObject>>,
    index: usize,
    max_depth: usize,
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            index: 0,
            max_depth: max_depth.max(1),
        }
    }

    /// Drops all snapshots and starts over from `shapes`.
    pub fn reset(&mut self, shapes: &[DrawingObject]) {
        self.snapshots.clear();
        self.snapshots.push(shapes.to_vec());
        self.index = 0;
    }

    pub fn push(&mut self, shapes: &[DrawingObject]) {
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(shapes.to_vec());
        if self.snapshots.len() > self.max_depth {
            self.snapshots.remove(0);
        }
        self.index = self.snapshots.len() - 1;
    }

    pub fn undo(&mut self) -> Option<&[DrawingObject]> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.snapshots.get(self.index).map(Vec::as_slice)
    }

    pub fn redo(&mut self) -> Option<&[DrawingObject]> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        self.snapshots.get(self.index).map(Vec::as_slice)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.snapshots.len()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Scene {
    /// Records the current shape list as a new history entry.
    pub fn save_state(&mut self) {
        self.history.push(&self.shapes);
        tracing::debug!(
            "Saved history state {}/{}",
            self.history.index() + 1,
            self.history.len()
        );
    }

    /// Restores the previous snapshot. Returns `false` at the oldest entry.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(snapshot) => {
                self.shapes = snapshot.to_vec();
                true
            }
            None => false,
        }
    }

    /// Restores the next snapshot. Returns `false` at the newest entry.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(snapshot) => {
                self.shapes = snapshot.to_vec();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
