//! Ordered element collection with z-order semantics.

use crate::element::{Element, ElementId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Direction for a z-order move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderDirection {
    /// One step toward the front.
    Up,
    /// One step toward the back.
    Down,
    /// All the way to the front.
    Top,
    /// All the way to the back.
    Bottom,
}

/// The ordered sequence of elements in an editing session.
///
/// Sequence position is z-order: index 0 renders bottom-most, the last index
/// top-most. Created empty; only mutated through the editor operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by id.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id() == id)
    }

    /// Get a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id() == id)
    }

    /// Z-order index of an element (0 = bottom-most).
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|el| el.id() == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    /// Append an element at the top of the z-order.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove all elements whose id is in `ids`, preserving survivor order.
    /// Returns the number of removed elements.
    pub fn remove_ids(&mut self, ids: &[ElementId]) -> usize {
        let before = self.elements.len();
        self.elements.retain(|el| !ids.contains(&el.id()));
        before - self.elements.len()
    }

    /// Elements in z-order (back to front).
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// Elements front to back, the order the layers list displays.
    pub fn iter_rev(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter().rev()
    }

    /// Union bounding box of all elements.
    pub fn bounds(&self) -> Option<Rect> {
        self.elements
            .iter()
            .map(Element::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// The frontmost visible element containing a document-space point.
    pub fn topmost_at(&self, point: Point) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|el| el.visible && el.contains(point))
            .map(Element::id)
    }

    /// Move an element one step in the given direction, or to the extreme.
    /// No-op (returns false) if the id is absent or already at the boundary.
    pub fn reorder(&mut self, id: ElementId, direction: ReorderDirection) -> bool {
        let Some(pos) = self.index_of(id) else {
            return false;
        };
        match direction {
            ReorderDirection::Up => {
                if pos + 1 < self.elements.len() {
                    self.elements.swap(pos, pos + 1);
                    return true;
                }
            }
            ReorderDirection::Down => {
                if pos > 0 {
                    self.elements.swap(pos, pos - 1);
                    return true;
                }
            }
            ReorderDirection::Top => {
                if pos + 1 < self.elements.len() {
                    let element = self.elements.remove(pos);
                    self.elements.push(element);
                    return true;
                }
            }
            ReorderDirection::Bottom => {
                if pos > 0 {
                    let element = self.elements.remove(pos);
                    self.elements.insert(0, element);
                    return true;
                }
            }
        }
        false
    }
}
