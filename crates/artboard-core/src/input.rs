//! Raw input events consumed by the interaction engine.

use crate::element::ElementId;
use crate::handles::ResizeHandle;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state, reported alongside keyboard events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    /// True when the platform primary chord key (Ctrl or Cmd) is held.
    pub fn primary(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// What a pointer-down landed on, as resolved by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The canvas background, no element under the pointer.
    Background,
    /// The body of an element.
    Element(ElementId),
    /// A resize handle of a selected element.
    Handle(ElementId, ResizeHandle),
}

/// Pointer event stream against the canvas surface.
/// Positions are in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
        target: PointerTarget,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
    /// Pointer left the canvas region; ends any gesture like `Up` does.
    Leave,
}
