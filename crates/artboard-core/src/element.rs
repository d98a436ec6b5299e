//! Canvas element model and mutation primitives.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an element.
pub type ElementId = Uuid;

/// Minimum width/height of an element in document units.
/// Enforced on creation and on every geometry mutation.
pub const MIN_SIZE: f64 = 20.0;

/// The kind of a canvas element. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Rectangle,
    Ellipse,
    Line,
    Text,
    Frame,
}

impl ElementKind {
    /// Display name used for auto-generated layer names.
    pub fn display_name(&self) -> &'static str {
        match self {
            ElementKind::Rectangle => "Rectangle",
            ElementKind::Ellipse => "Ellipse",
            ElementKind::Line => "Line",
            ElementKind::Text => "Text",
            ElementKind::Frame => "Frame",
        }
    }
}

/// RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Default fill for newly drawn shapes.
    pub const ACCENT: Color = Color::rgb(0x63, 0x66, 0xf1);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Parse a hex color string (#rgb, #rrggbb, #rrggbbaa).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?.trim();
        match hex.len() {
            3 => {
                let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
                let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
                let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
                Some(Self::rgb(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::rgb(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = u8::from_str_radix(&hex[6..8], 16).ok()?;
                Some(Self::new(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Format as a lowercase #rrggbb (or #rrggbbaa) hex string.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

/// A single object on the canvas.
///
/// `fill`/`stroke` use `None` as the "transparent" sentinel. Width and height
/// never drop below [`MIN_SIZE`]; `opacity` stays in 0..=100. `rotation` is
/// stored unconstrained in degrees, display wraps modulo 360.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    pub(crate) kind: ElementKind,
    /// Top-left corner in document space.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees around the element center.
    pub rotation: f64,
    pub fill: Option<Color>,
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    /// Opacity percentage, 0..=100.
    pub opacity: f64,
    /// User-editable layer name.
    pub name: String,
    /// Locked elements are excluded from pointer gestures and select-all.
    pub locked: bool,
    /// Hidden elements stay in the document and layers list but do not render.
    pub visible: bool,
    /// Text content (Text elements only).
    pub text: Option<String>,
    /// Font size (Text elements only).
    pub font_size: Option<f64>,
    /// Corner radius (Rectangle elements only).
    pub corner_radius: Option<f64>,
}

impl Element {
    /// Create a new element with default styling.
    ///
    /// `ordinal` is the 1-based number used for the auto-generated name
    /// ("Rectangle 3"). Width and height are clamped to [`MIN_SIZE`].
    pub fn new(kind: ElementKind, x: f64, y: f64, width: f64, height: f64, ordinal: usize) -> Self {
        let fill = match kind {
            ElementKind::Text => None,
            _ => Some(Color::ACCENT),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            x,
            y,
            width: width.max(MIN_SIZE),
            height: height.max(MIN_SIZE),
            rotation: 0.0,
            fill,
            stroke: None,
            stroke_width: 0.0,
            opacity: 100.0,
            name: format!("{} {}", kind.display_name(), ordinal),
            locked: false,
            visible: true,
            text: (kind == ElementKind::Text).then(|| "Text".to_string()),
            font_size: (kind == ElementKind::Text).then_some(24.0),
            corner_radius: (kind == ElementKind::Rectangle).then_some(0.0),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Axis-aligned bounding box (rotation is ignored for hit/align math).
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Check whether a document-space point falls inside the element.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().contains(point)
    }

    /// Rotation wrapped into 0..360 for display.
    pub fn display_rotation(&self) -> f64 {
        self.rotation.rem_euclid(360.0)
    }

    /// Clone with a fresh id, offset by (+20, +20), name suffixed " copy".
    /// Used by both duplicate and paste.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = Uuid::new_v4();
        copy.x += 20.0;
        copy.y += 20.0;
        copy.name.push_str(" copy");
        copy
    }
}

/// Partial update for [`Element`].
///
/// `id` and `kind` are deliberately not representable here, so an update can
/// never alter them. `fill`/`stroke` use a doubled `Option`: the outer level
/// means "field present in the patch", the inner is the transparent sentinel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ElementPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub fill: Option<Option<Color>>,
    pub stroke: Option<Option<Color>>,
    pub stroke_width: Option<f64>,
    pub opacity: Option<f64>,
    pub name: Option<String>,
    pub locked: Option<bool>,
    pub visible: Option<bool>,
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub corner_radius: Option<f64>,
}

impl ElementPatch {
    /// Patch that only moves the element.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch that moves and resizes the element.
    pub fn geometry(rect: Rect) -> Self {
        Self {
            x: Some(rect.x0),
            y: Some(rect.y0),
            width: Some(rect.width()),
            height: Some(rect.height()),
            ..Self::default()
        }
    }

    /// Merge the patch into an element, clamping out-of-range values.
    pub fn apply(&self, element: &mut Element) {
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width.max(MIN_SIZE);
        }
        if let Some(height) = self.height {
            element.height = height.max(MIN_SIZE);
        }
        if let Some(rotation) = self.rotation {
            element.rotation = rotation;
        }
        if let Some(fill) = self.fill {
            element.fill = fill;
        }
        if let Some(stroke) = self.stroke {
            element.stroke = stroke;
        }
        if let Some(stroke_width) = self.stroke_width {
            element.stroke_width = stroke_width.max(0.0);
        }
        if let Some(opacity) = self.opacity {
            element.opacity = opacity.clamp(0.0, 100.0);
        }
        if let Some(ref name) = self.name {
            element.name = name.clone();
        }
        if let Some(locked) = self.locked {
            element.locked = locked;
        }
        if let Some(visible) = self.visible {
            element.visible = visible;
        }
        if let Some(ref text) = self.text {
            element.text = Some(text.clone());
        }
        if let Some(font_size) = self.font_size {
            element.font_size = Some(font_size);
        }
        if let Some(corner_radius) = self.corner_radius {
            element.corner_radius = Some(corner_radius.max(0.0));
        }
    }
}
