pub use kurbo::{Point, Size, Vec2};

/// Percentage coordinates relative to the composition canvas.
///
/// `x` is a percentage of the canvas width and `y` a percentage of its height. Interactive edits
/// keep both axes inside `[0, 100]`; programmatic edits may place a layer outside the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Position {
    /// Horizontal percentage of the canvas width.
    pub x: f64,
    /// Vertical percentage of the canvas height.
    pub y: f64,
}

impl Position {
    /// Create a position from percentage coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp each axis independently into `[0, 100]`.
    pub fn clamped(self) -> Self {
        Self {
            x: crate::foundation::math::clamp_percent(self.x),
            y: crate::foundation::math::clamp_percent(self.y),
        }
    }

    /// Offset by a pixel delta measured inside a container of `container` size.
    ///
    /// Degenerate containers (zero or non-finite extent) leave the axis unchanged.
    pub fn offset_by_pixels(self, delta: Vec2, container: Size) -> Self {
        fn axis(start: f64, delta_px: f64, extent_px: f64) -> f64 {
            if !extent_px.is_finite() || extent_px <= 0.0 {
                return start;
            }
            start + delta_px / extent_px * 100.0
        }

        Self {
            x: axis(self.x, delta.x, container.width),
            y: axis(self.y, delta.y, container.height),
        }
    }

    /// Map the percentage position into a pixel point inside `canvas`.
    pub fn to_canvas_point(self, canvas: Canvas) -> Point {
        Point::new(
            self.x / 100.0 * f64::from(canvas.width),
            self.y / 100.0 * f64::from(canvas.height),
        )
    }
}

/// Logical composition canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in logical pixels.
    pub width: u32,
    /// Height in logical pixels.
    pub height: u32,
}

impl Canvas {
    /// Fixed thumbnail canvas (16:9).
    pub const THUMBNAIL: Canvas = Canvas {
        width: 2560,
        height: 1440,
    };

    /// Canvas extent as a kurbo size.
    pub fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::THUMBNAIL
    }
}

/// Straight-alpha RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque colour from RGB channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with its alpha replaced.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
