//! Single-shape selection.

use pixelkit_core::ShapeId;

use super::Scene;
use crate::model::DrawingObject;

impl Scene {
    /// Clears every selection flag, then selects `id` if it exists.
    ///
    /// Returns `true` when a shape ended up selected.
    pub fn select_shape(&mut self, id: Option<&ShapeId>) -> bool {
        let mut found = false;
        for obj in &mut self.shapes {
            obj.selected = id == Some(&obj.id);
            found |= obj.selected;
        }
        found
    }

    pub fn clear_selection(&mut self) {
        self.select_shape(None);
    }

    pub fn selected_shape(&self) -> Option<&DrawingObject> {
        self.shapes.iter().find(|s| s.selected)
    }

    pub fn selected_id(&self) -> Option<ShapeId> {
        self.selected_shape().map(|s| s.id.clone())
    }

    /// Keeps only the first selected shape selected.
    pub(crate) fn enforce_single_selection(&mut self) {
        let mut seen = false;
        for obj in &mut self.shapes {
            if obj.selected && seen {
                obj.selected = false;
            }
            seen |= obj.selected;
        }
    }
}
