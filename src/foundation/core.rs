pub use kurbo::Point;

use crate::foundation::error::{LogoError, LogoResult};

/// Logical canvas width; all layout geometry is expressed in this space.
pub const LOGICAL_WIDTH: f64 = 400.0;
/// Logical canvas height (fixed 2:1 aspect).
pub const LOGICAL_HEIGHT: f64 = 200.0;

/// The fixed logical canvas every scene graph is laid out in.
pub const LOGICAL_CANVAS: Canvas = Canvas {
    width: LOGICAL_WIDTH as u32,
    height: LOGICAL_HEIGHT as u32,
};

/// Vertical bias applied to the name/symbol row so the tagline fits below center.
pub const NAME_ROW_LIFT: f64 = 15.0;

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> LogoResult<Self> {
        if width == 0 || height == 0 {
            return Err(LogoError::validation("canvas width/height must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Multiply both dimensions by `factor` using saturating arithmetic.
    pub fn scaled(self, factor: u32) -> Self {
        Self {
            width: self.width.saturating_mul(factor),
            height: self.height.saturating_mul(factor),
        }
    }

    /// Center point of the canvas.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}
