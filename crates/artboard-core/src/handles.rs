//! Resize handles on the selection rectangle.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Which horizontal edge a handle drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalEdge {
    East,
    West,
}

/// Which vertical edge a handle drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalEdge {
    North,
    South,
}

/// One of the eight compass-direction resize handles.
///
/// Each handle decomposes into an optional horizontal and an optional
/// vertical edge token; the two axes resize independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeHandle {
    /// All handles, in the order the selection chrome lays them out.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::NorthWest,
        ResizeHandle::North,
        ResizeHandle::NorthEast,
        ResizeHandle::East,
        ResizeHandle::SouthEast,
        ResizeHandle::South,
        ResizeHandle::SouthWest,
        ResizeHandle::West,
    ];

    pub fn horizontal(self) -> Option<HorizontalEdge> {
        match self {
            ResizeHandle::East | ResizeHandle::NorthEast | ResizeHandle::SouthEast => {
                Some(HorizontalEdge::East)
            }
            ResizeHandle::West | ResizeHandle::NorthWest | ResizeHandle::SouthWest => {
                Some(HorizontalEdge::West)
            }
            ResizeHandle::North | ResizeHandle::South => None,
        }
    }

    pub fn vertical(self) -> Option<VerticalEdge> {
        match self {
            ResizeHandle::North | ResizeHandle::NorthEast | ResizeHandle::NorthWest => {
                Some(VerticalEdge::North)
            }
            ResizeHandle::South | ResizeHandle::SouthEast | ResizeHandle::SouthWest => {
                Some(VerticalEdge::South)
            }
            ResizeHandle::East | ResizeHandle::West => None,
        }
    }

    /// Where the handle sits on a selection rectangle, in document space.
    pub fn anchor(self, bounds: Rect) -> Point {
        let cx = bounds.center().x;
        let cy = bounds.center().y;
        match self {
            ResizeHandle::NorthWest => Point::new(bounds.x0, bounds.y0),
            ResizeHandle::North => Point::new(cx, bounds.y0),
            ResizeHandle::NorthEast => Point::new(bounds.x1, bounds.y0),
            ResizeHandle::East => Point::new(bounds.x1, cy),
            ResizeHandle::SouthEast => Point::new(bounds.x1, bounds.y1),
            ResizeHandle::South => Point::new(cx, bounds.y1),
            ResizeHandle::SouthWest => Point::new(bounds.x0, bounds.y1),
            ResizeHandle::West => Point::new(bounds.x0, cy),
        }
    }

    /// CSS cursor name the presentation layer shows over this handle.
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeHandle::NorthWest | ResizeHandle::SouthEast => "nwse-resize",
            ResizeHandle::NorthEast | ResizeHandle::SouthWest => "nesw-resize",
            ResizeHandle::North | ResizeHandle::South => "ns-resize",
            ResizeHandle::East | ResizeHandle::West => "ew-resize",
        }
    }
}
