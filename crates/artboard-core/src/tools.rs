//! Tool modes for pointer input interpretation.

use crate::element::ElementKind;
use serde::{Deserialize, Serialize};

/// Current input-interpretation mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Select,
    Frame,
    Rectangle,
    Ellipse,
    Line,
    Text,
    Hand,
}

impl Tool {
    /// The element kind a drawing gesture with this tool creates.
    /// `None` for Select and Hand, which never create elements.
    pub fn drawn_kind(self) -> Option<ElementKind> {
        match self {
            Tool::Rectangle => Some(ElementKind::Rectangle),
            Tool::Ellipse => Some(ElementKind::Ellipse),
            Tool::Line => Some(ElementKind::Line),
            Tool::Text => Some(ElementKind::Text),
            Tool::Frame => Some(ElementKind::Frame),
            Tool::Select | Tool::Hand => None,
        }
    }

    /// Whether this tool draws new elements.
    pub fn is_drawing(self) -> bool {
        self.drawn_kind().is_some()
    }

    /// Single-key toolbar shortcut for this tool.
    pub fn shortcut_key(self) -> char {
        match self {
            Tool::Select => 'v',
            Tool::Frame => 'f',
            Tool::Rectangle => 'r',
            Tool::Ellipse => 'o',
            Tool::Line => 'l',
            Tool::Text => 't',
            Tool::Hand => 'h',
        }
    }
}
