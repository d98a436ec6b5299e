//! Editor session state and the document store operations.

use crate::camera::Camera;
use crate::document::{Document, ReorderDirection};
use crate::element::{Element, ElementId, ElementKind, ElementPatch, MIN_SIZE};
use crate::input::{MouseButton, PointerEvent, PointerTarget};
use crate::interaction::{DRAW_THRESHOLD, InteractionState, resize_bounds};
use crate::tools::Tool;
use kurbo::{Point, Rect, Vec2};
use log::debug;

/// Axis and edge to align a group of elements against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
}

/// The single-owner mutable state of an editing session.
///
/// Owns the document, selection, clipboard and view transform; every
/// mutation flows through the methods here, so no two writers ever race and
/// the selection can never reference a deleted element.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pub document: Document,
    pub camera: Camera,
    selection: Vec<ElementId>,
    clipboard: Vec<Element>,
    tool: Tool,
    interaction: InteractionState,
}

impl Editor {
    /// Create a session with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Selection ----

    /// Currently selected ids. Always a subset of the live document.
    pub fn selection(&self) -> &[ElementId] {
        &self.selection
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selection.contains(&id)
    }

    /// Replace the selection with a single element.
    pub fn select_only(&mut self, id: ElementId) {
        if self.document.contains(id) {
            self.selection = vec![id];
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Select every unlocked element. Locked elements are always excluded.
    pub fn select_all(&mut self) {
        self.selection = self
            .document
            .iter()
            .filter(|el| !el.locked)
            .map(Element::id)
            .collect();
    }

    /// Selected elements in z-order. The properties panel reads the first;
    /// delete/duplicate/align act on the full set.
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.document
            .iter()
            .filter(|el| self.selection.contains(&el.id()))
            .collect()
    }

    /// Whether any selected element is locked (context menu label state).
    pub fn any_selected_locked(&self) -> bool {
        self.selected_elements().iter().any(|el| el.locked)
    }

    /// Whether any selected element is hidden.
    pub fn any_selected_hidden(&self) -> bool {
        self.selected_elements().iter().any(|el| !el.visible)
    }

    // ---- Tool and view ----

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.interaction = InteractionState::Idle;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.camera.set_zoom(zoom);
    }

    pub fn set_pan(&mut self, pan: Vec2) {
        self.camera.set_pan(pan);
    }

    // ---- Document store operations ----

    /// Create a new element at the top of the z-order, select it and revert
    /// the tool to Select. Width/height are clamped to the minimum size.
    pub fn add_element(
        &mut self,
        kind: ElementKind,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> ElementId {
        let element = Element::new(kind, x, y, width, height, self.document.len() + 1);
        let id = element.id();
        debug!("add {} ({:?}) at ({x:.1}, {y:.1})", element.name, kind);
        self.document.push(element);
        self.selection = vec![id];
        self.tool = Tool::Select;
        id
    }

    /// Merge a partial update into an element. No-op on an unknown id;
    /// `id` and `kind` cannot be altered this way.
    pub fn update_element(&mut self, id: ElementId, patch: ElementPatch) {
        if let Some(element) = self.document.get_mut(id) {
            patch.apply(element);
        }
    }

    /// Remove the given elements and clear the selection entirely.
    pub fn delete_elements(&mut self, ids: &[ElementId]) {
        let removed = self.document.remove_ids(ids);
        if removed > 0 {
            debug!("deleted {removed} element(s)");
        }
        self.selection.clear();
    }

    /// Copy each listed element (in z-order) with a fresh id, +20/+20 offset
    /// and " copy" name suffix; copies land on top in the same relative
    /// order and become the new selection. Returns the new ids.
    pub fn duplicate_elements(&mut self, ids: &[ElementId]) -> Vec<ElementId> {
        let copies: Vec<Element> = self
            .document
            .iter()
            .filter(|el| ids.contains(&el.id()))
            .map(Element::duplicate)
            .collect();
        if copies.is_empty() {
            return Vec::new();
        }
        let new_ids: Vec<ElementId> = copies.iter().map(Element::id).collect();
        debug!("duplicated {} element(s)", copies.len());
        for copy in copies {
            self.document.push(copy);
        }
        self.selection = new_ids.clone();
        new_ids
    }

    /// Move an element within the z-order. No-op on an unknown id.
    pub fn reorder_element(&mut self, id: ElementId, direction: ReorderDirection) {
        self.document.reorder(id, direction);
    }

    /// Align elements against the union bounding box of the whole set.
    /// No-op when `ids` matches nothing.
    pub fn align_elements(&mut self, ids: &[ElementId], alignment: Alignment) {
        let bounds = ids
            .iter()
            .filter_map(|&id| self.document.get(id))
            .map(Element::bounds)
            .reduce(|acc, b| acc.union(b));
        let Some(bounds) = bounds else {
            return;
        };
        for &id in ids {
            let Some(el) = self.document.get_mut(id) else {
                continue;
            };
            match alignment {
                Alignment::Left => el.x = bounds.x0,
                Alignment::Center => el.x = bounds.x0 + bounds.width() / 2.0 - el.width / 2.0,
                Alignment::Right => el.x = bounds.x1 - el.width,
                Alignment::Top => el.y = bounds.y0,
                Alignment::Middle => el.y = bounds.y0 + bounds.height() / 2.0 - el.height / 2.0,
                Alignment::Bottom => el.y = bounds.y1 - el.height,
            }
        }
    }

    // ---- Clipboard ----

    /// Snapshot the matching elements, by value, in z-order.
    pub fn copy(&mut self, ids: &[ElementId]) {
        self.clipboard = self
            .document
            .iter()
            .filter(|el| ids.contains(&el.id()))
            .cloned()
            .collect();
    }

    /// Copy, then remove the originals. Clears the selection.
    pub fn cut(&mut self, ids: &[ElementId]) {
        self.copy(ids);
        self.delete_elements(ids);
    }

    /// Materialize the clipboard snapshot as new elements offset +20/+20
    /// from the snapshot coordinates. Repeatable; the clipboard survives.
    /// Returns the new ids (empty if the clipboard is empty).
    pub fn paste(&mut self) -> Vec<ElementId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let copies: Vec<Element> = self.clipboard.iter().map(Element::duplicate).collect();
        let new_ids: Vec<ElementId> = copies.iter().map(Element::id).collect();
        debug!("pasted {} element(s)", copies.len());
        for copy in copies {
            self.document.push(copy);
        }
        self.selection = new_ids.clone();
        new_ids
    }

    pub fn has_clipboard(&self) -> bool {
        !self.clipboard.is_empty()
    }

    /// Flip the locked flag on each matching element independently.
    pub fn toggle_lock(&mut self, ids: &[ElementId]) {
        for &id in ids {
            if let Some(el) = self.document.get_mut(id) {
                el.locked = !el.locked;
            }
        }
    }

    /// Flip the visible flag on each matching element independently.
    pub fn toggle_visibility(&mut self, ids: &[ElementId]) {
        for &id in ids {
            if let Some(el) = self.document.get_mut(id) {
                el.visible = !el.visible;
            }
        }
    }

    /// Escape: abort any in-progress gesture, drop the selection and fall
    /// back to the Select tool. A partially drawn element is discarded,
    /// never committed.
    pub fn cancel(&mut self) {
        self.interaction = InteractionState::Idle;
        self.selection.clear();
        self.tool = Tool::Select;
    }

    // ---- Pointer gestures ----

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Rubber-band rectangle of an in-progress draw gesture, for rendering.
    pub fn drawing_preview(&self) -> Option<Rect> {
        self.interaction.drawing_rect()
    }

    /// Feed one pointer event through the gesture state machine.
    ///
    /// Down events carry the target resolved by the presentation layer
    /// (background, element body, or resize handle). Up and Leave both end
    /// the active gesture.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button,
                target,
            } => self.pointer_down(position, button, target),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { .. } | PointerEvent::Leave => self.end_gesture(),
        }
    }

    fn pointer_down(&mut self, position: Point, button: MouseButton, target: PointerTarget) {
        if button != MouseButton::Left || !self.interaction.is_idle() {
            return;
        }
        let doc_point = self.camera.screen_to_doc(position);

        match self.tool {
            Tool::Hand => {
                self.interaction = InteractionState::Panning {
                    start: position,
                    origin_pan: self.camera.pan,
                };
            }
            Tool::Select => match target {
                PointerTarget::Background => self.clear_selection(),
                PointerTarget::Element(id) => {
                    let Some((origin, locked)) = self
                        .document
                        .get(id)
                        .map(|el| (Point::new(el.x, el.y), el.locked))
                    else {
                        return;
                    };
                    if locked {
                        return;
                    }
                    self.select_only(id);
                    self.interaction = InteractionState::Dragging {
                        id,
                        start: doc_point,
                        origin,
                    };
                }
                PointerTarget::Handle(id, handle) => {
                    if !self.is_selected(id) {
                        return;
                    }
                    let Some((origin, locked)) =
                        self.document.get(id).map(|el| (el.bounds(), el.locked))
                    else {
                        return;
                    };
                    if locked {
                        return;
                    }
                    self.interaction = InteractionState::Resizing {
                        id,
                        handle,
                        start: doc_point,
                        origin,
                    };
                }
            },
            _ => {
                // Drawing tools only start from the canvas background.
                if target == PointerTarget::Background {
                    self.interaction = InteractionState::Drawing {
                        start: doc_point,
                        current: doc_point,
                    };
                }
            }
        }
    }

    fn pointer_move(&mut self, position: Point) {
        match self.interaction {
            InteractionState::Idle => {}
            InteractionState::Panning { start, origin_pan } => {
                self.camera.set_pan(origin_pan + (position - start));
            }
            InteractionState::Drawing { start, .. } => {
                self.interaction = InteractionState::Drawing {
                    start,
                    current: self.camera.screen_to_doc(position),
                };
            }
            InteractionState::Dragging { id, start, origin } => {
                let delta = self.camera.screen_to_doc(position) - start;
                let moved = origin + delta;
                self.update_element(id, ElementPatch::position(moved.x, moved.y));
            }
            InteractionState::Resizing {
                id,
                handle,
                start,
                origin,
            } => {
                let delta = self.camera.screen_to_doc(position) - start;
                let bounds = resize_bounds(origin, handle, delta);
                self.update_element(id, ElementPatch::geometry(bounds));
            }
        }
    }

    /// Pointer released or left the canvas. Dragging and resizing already
    /// applied their updates live; a draw gesture finalizes here if it
    /// cleared the accidental-click threshold on either axis.
    fn end_gesture(&mut self) {
        let state = std::mem::take(&mut self.interaction);
        if let InteractionState::Drawing { start, current } = state {
            let rect = Rect::from_points(start, current);
            if rect.width() > DRAW_THRESHOLD || rect.height() > DRAW_THRESHOLD {
                if let Some(kind) = self.tool.drawn_kind() {
                    self.add_element(
                        kind,
                        rect.x0,
                        rect.y0,
                        rect.width().max(MIN_SIZE),
                        rect.height().max(MIN_SIZE),
                    );
                }
            }
        }
    }
}
