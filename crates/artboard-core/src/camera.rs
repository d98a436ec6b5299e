//! View transform between screen space and document space.

use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum allowed zoom level.
pub const MIN_ZOOM: f64 = 0.1;
/// Maximum allowed zoom level.
pub const MAX_ZOOM: f64 = 5.0;
/// Zoom increment used by the zoom in/out controls.
pub const ZOOM_STEP: f64 = 0.1;

/// Pan/zoom state for the canvas viewport.
///
/// `pan` is the translation in screen pixels; `zoom` the scale factor.
/// A screen point maps to document space as `(screen - pan) / zoom`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Camera {
    pub pan: Vec2,
    zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Create a camera at the origin with 100% zoom.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Convert a screen-space point to document space.
    pub fn screen_to_doc(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    /// Convert a document-space point to screen space.
    pub fn doc_to_screen(&self, doc: Point) -> Point {
        Point::new(
            doc.x * self.zoom + self.pan.x,
            doc.y * self.zoom + self.pan.y,
        )
    }

    /// Set the zoom level, clamped to [MIN_ZOOM, MAX_ZOOM].
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Reset to origin and 100% zoom.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let camera = Camera::new();
        let p = Point::new(100.0, 200.0);
        let doc = camera.screen_to_doc(p);
        assert!((doc.x - p.x).abs() < f64::EPSILON);
        assert!((doc.y - p.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_to_doc_with_pan_and_zoom() {
        let mut camera = Camera::new();
        camera.set_pan(Vec2::new(50.0, 100.0));
        camera.set_zoom(2.0);
        let doc = camera.screen_to_doc(Point::new(150.0, 300.0));
        assert!((doc.x - 50.0).abs() < f64::EPSILON);
        assert!((doc.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_roundtrip() {
        let mut camera = Camera::new();
        camera.set_pan(Vec2::new(30.0, -20.0));
        camera.set_zoom(1.5);

        let original = Point::new(123.0, 456.0);
        let back = camera.doc_to_screen(camera.screen_to_doc(original));
        assert!((back.x - original.x).abs() < 1e-10);
        assert!((back.y - original.y).abs() < 1e-10);
    }

    #[test]
    fn test_zoom_clamp() {
        let mut camera = Camera::new();
        camera.set_zoom(0.001);
        assert!((camera.zoom() - MIN_ZOOM).abs() < f64::EPSILON);

        camera.set_zoom(100.0);
        assert!((camera.zoom() - MAX_ZOOM).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_steps_stay_in_range() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom_out();
        }
        assert!((camera.zoom() - MIN_ZOOM).abs() < f64::EPSILON);
        for _ in 0..100 {
            camera.zoom_in();
        }
        assert!((camera.zoom() - MAX_ZOOM).abs() < f64::EPSILON);
    }
}
