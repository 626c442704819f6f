//! Drawing-surface abstraction.
//!
//! The renderer only talks to a [`Surface`]; the raster backend and test
//! recorders implement it. All coordinates are pixels from the top-left
//! corner, X to the right and Y downward.

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X position in pixels from the left edge.
    pub x: f64,
    /// Y position in pixels from the top edge.
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a colour from its channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
}

/// Horizontal alignment of text relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    #[default]
    Start,
    /// Text is centred on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Direction text runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left to right.
    #[default]
    Horizontal,
    /// Bottom to top (rotated 90 degrees counter-clockwise).
    Vertical,
}

/// Relative text size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextSize {
    /// Tick and caption labels.
    #[default]
    Label,
    /// Chart title.
    Title,
}

/// How a text run is placed and painted.
///
/// The anchor point sits on the vertical centre line of the text; the
/// [`TextAnchor`] picks the horizontal alignment along the text direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    /// Fill colour.
    pub color: Color,
    /// Alignment along the text direction.
    pub anchor: TextAnchor,
    /// Text direction.
    pub orientation: Orientation,
    /// Relative size.
    pub size: TextSize,
}

impl TextStyle {
    /// Creates a horizontal label-sized style.
    #[must_use]
    pub const fn new(color: Color, anchor: TextAnchor) -> Self {
        Self {
            color,
            anchor,
            orientation: Orientation::Horizontal,
            size: TextSize::Label,
        }
    }

    /// Sets the text direction.
    #[must_use]
    pub const fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets the text size.
    #[must_use]
    pub const fn with_size(mut self, size: TextSize) -> Self {
        self.size = size;
        self
    }
}

/// The drawing primitives a chart is rendered with.
pub trait Surface {
    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draws a one-pixel line segment.
    fn stroke_line(&mut self, from: Point, to: Point, color: Color);

    /// Draws a run of text.
    fn fill_text(&mut self, text: &str, at: Point, style: TextStyle);

    /// Draws a filled circular point marker.
    fn stroke_arc_point(&mut self, center: Point, radius: f64, color: Color);
}
