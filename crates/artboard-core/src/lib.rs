//! Artboard Core Library
//!
//! Platform-agnostic document model and interaction logic for the Artboard
//! vector editor: the element store, selection and clipboard, pointer gesture
//! state machine, view transform and keyboard command dispatch.

pub mod camera;
pub mod document;
pub mod editor;
pub mod element;
pub mod handles;
pub mod input;
pub mod interaction;
pub mod shortcuts;
pub mod tools;

pub use camera::{Camera, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
pub use document::{Document, ReorderDirection};
pub use editor::{Alignment, Editor};
pub use element::{Color, Element, ElementId, ElementKind, ElementPatch, MIN_SIZE};
pub use handles::{HorizontalEdge, ResizeHandle, VerticalEdge};
pub use input::{Modifiers, MouseButton, PointerEvent, PointerTarget};
pub use interaction::{InteractionState, DRAW_THRESHOLD};
pub use shortcuts::{command_for_key, Command, Shortcut, ShortcutRegistry};
pub use tools::Tool;
