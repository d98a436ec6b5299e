//! Pointer gesture state machine.
//!
//! One tagged union covers the mutually exclusive gestures; every variant is
//! entered from `Idle` on a qualifying pointer-down and pointer-up/leave
//! always returns to `Idle`. The transition logic lives on
//! [`crate::editor::Editor::handle_pointer_event`].

use crate::element::{ElementId, MIN_SIZE};
use crate::handles::{HorizontalEdge, ResizeHandle, VerticalEdge};
use kurbo::{Point, Rect, Vec2};

/// Document-space distance a draw gesture must cover on either axis before
/// it creates an element. Smaller gestures are treated as accidental clicks.
pub const DRAW_THRESHOLD: f64 = 5.0;

/// The active pointer gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Rubber-banding a new shape. Both corners in document space.
    Drawing { start: Point, current: Point },
    /// Moving an element. `origin` is the element position at pointer-down.
    Dragging {
        id: ElementId,
        start: Point,
        origin: Point,
    },
    /// Resizing via a handle. `origin` is the element bounds at pointer-down.
    Resizing {
        id: ElementId,
        handle: ResizeHandle,
        start: Point,
        origin: Rect,
    },
    /// Panning the camera. `start` is in screen space.
    Panning { start: Point, origin_pan: Vec2 },
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    /// The rubber-band rectangle of an in-progress draw gesture,
    /// normalized so width/height are non-negative.
    pub fn drawing_rect(&self) -> Option<Rect> {
        match self {
            InteractionState::Drawing { start, current } => {
                Some(Rect::from_points(*start, *current))
            }
            _ => None,
        }
    }
}

/// Compute the resized bounds for a handle drag.
///
/// Each axis is adjusted independently by the handle's edge tokens with the
/// [`MIN_SIZE`] floor applied per event. When a west/north resize clamps, the
/// position offset is re-derived from the clamped dimension so the opposite
/// edge stays fixed instead of following the raw delta.
pub(crate) fn resize_bounds(origin: Rect, handle: ResizeHandle, delta: Vec2) -> Rect {
    let mut x = origin.x0;
    let mut y = origin.y0;
    let mut width = origin.width();
    let mut height = origin.height();

    match handle.horizontal() {
        Some(HorizontalEdge::East) => {
            width = (origin.width() + delta.x).max(MIN_SIZE);
        }
        Some(HorizontalEdge::West) => {
            width = (origin.width() - delta.x).max(MIN_SIZE);
            x = origin.x0 + (origin.width() - width);
        }
        None => {}
    }
    match handle.vertical() {
        Some(VerticalEdge::South) => {
            height = (origin.height() + delta.y).max(MIN_SIZE);
        }
        Some(VerticalEdge::North) => {
            height = (origin.height() - delta.y).max(MIN_SIZE);
            y = origin.y0 + (origin.height() - height);
        }
        None => {}
    }

    Rect::new(x, y, x + width, y + height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_east_grows_width_only() {
        let origin = Rect::new(10.0, 10.0, 110.0, 60.0);
        let out = resize_bounds(origin, ResizeHandle::East, Vec2::new(30.0, 99.0));
        assert!((out.width() - 130.0).abs() < f64::EPSILON);
        assert!((out.height() - 50.0).abs() < f64::EPSILON);
        assert!((out.x0 - 10.0).abs() < f64::EPSILON);
        assert!((out.y0 - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_west_moves_x_with_width() {
        let origin = Rect::new(10.0, 10.0, 110.0, 60.0);
        let out = resize_bounds(origin, ResizeHandle::West, Vec2::new(30.0, 0.0));
        assert!((out.width() - 70.0).abs() < f64::EPSILON);
        assert!((out.x0 - 40.0).abs() < f64::EPSILON);
        // East edge stays put.
        assert!((out.x1 - 110.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_corner_resizes_both_axes() {
        let origin = Rect::new(0.0, 0.0, 100.0, 100.0);
        let out = resize_bounds(origin, ResizeHandle::SouthEast, Vec2::new(50.0, 25.0));
        assert!((out.width() - 150.0).abs() < f64::EPSILON);
        assert!((out.height() - 125.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_west_clamp_keeps_east_edge_fixed() {
        // x=0, width=30; dragging the west handle by dx=50 clamps width to 20
        // and x must land at 10, not at the raw 50.
        let origin = Rect::new(0.0, 0.0, 30.0, 100.0);
        let out = resize_bounds(origin, ResizeHandle::West, Vec2::new(50.0, 0.0));
        assert!((out.width() - MIN_SIZE).abs() < f64::EPSILON);
        assert!((out.x0 - 10.0).abs() < f64::EPSILON);
        assert!((out.x1 - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_north_clamp_keeps_south_edge_fixed() {
        let origin = Rect::new(0.0, 0.0, 100.0, 25.0);
        let out = resize_bounds(origin, ResizeHandle::NorthWest, Vec2::new(0.0, 40.0));
        assert!((out.height() - MIN_SIZE).abs() < f64::EPSILON);
        assert!((out.y0 - 5.0).abs() < f64::EPSILON);
        assert!((out.y1 - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drawing_rect_normalizes_corners() {
        let state = InteractionState::Drawing {
            start: Point::new(100.0, 100.0),
            current: Point::new(40.0, 160.0),
        };
        let rect = state.drawing_rect().unwrap();
        assert!((rect.x0 - 40.0).abs() < f64::EPSILON);
        assert!((rect.y0 - 100.0).abs() < f64::EPSILON);
        assert!((rect.width() - 60.0).abs() < f64::EPSILON);
        assert!((rect.height() - 60.0).abs() < f64::EPSILON);

        assert!(InteractionState::Idle.drawing_rect().is_none());
    }
}
