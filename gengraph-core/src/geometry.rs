//! Planar geometry primitives shared by the layout and selection stages.

/// A position on the canvas.
///
/// # Examples
/// ```
/// use gengraph_core::Point;
///
/// let origin = Point::new(0.0, 0.0);
/// let corner = Point::new(3.0, 4.0);
/// assert!((origin.distance_to(corner) - 5.0).abs() < f64::EPSILON);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between `self` and `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Point at fraction `t` along the segment from `self` to `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Point at `radius` from `self` in direction `angle` (radians).
    #[must_use]
    pub fn offset_polar(self, radius: f64, angle: f64) -> Self {
        Self {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }
}

/// Drawing area that node positions are generated in.
///
/// Scatter positions fall inside `[0, width) × [0, height)`; aligned layouts
/// are centred on the canvas and kept `margin` away from its nearest edge.
///
/// # Examples
/// ```
/// use gengraph_core::Canvas;
///
/// let canvas = Canvas::new(800.0, 600.0, 20.0);
/// assert!((canvas.radius() - 280.0).abs() < f64::EPSILON);
/// assert_eq!(canvas.center().x, 400.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    width: f64,
    height: f64,
    margin: f64,
}

impl Canvas {
    /// Default canvas width.
    pub const DEFAULT_WIDTH: f64 = 800.0;
    /// Default canvas height.
    pub const DEFAULT_HEIGHT: f64 = 600.0;
    /// Default distance kept between aligned layouts and the canvas border.
    pub const DEFAULT_MARGIN: f64 = 20.0;

    /// Creates a canvas without validating its dimensions.
    ///
    /// [`crate::GraphBuilder::build`] and [`crate::build_nodes`] reject
    /// canvases that fail [`Canvas::validate`].
    #[must_use]
    pub const fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Canvas width.
    #[must_use]
    #[rustfmt::skip]
    pub const fn width(&self) -> f64 { self.width }

    /// Canvas height.
    #[must_use]
    #[rustfmt::skip]
    pub const fn height(&self) -> f64 { self.height }

    /// Margin kept around aligned layouts.
    #[must_use]
    #[rustfmt::skip]
    pub const fn margin(&self) -> f64 { self.margin }

    /// Centre of the canvas.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Radius of the circle used by aligned layouts.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.width.min(self.height) / 2.0 - self.margin
    }

    /// Checks that the dimensions are finite and leave a positive radius.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidConfiguration`] naming `width`,
    /// `height` or `margin` when that field is out of range.
    pub fn validate(&self) -> crate::Result<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(crate::GraphError::invalid(
                "width",
                format!("canvas width must be finite and > 0 (got {})", self.width),
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(crate::GraphError::invalid(
                "height",
                format!("canvas height must be finite and > 0 (got {})", self.height),
            ));
        }
        if !self.margin.is_finite() || self.margin < 0.0 || self.radius() <= 0.0 {
            return Err(crate::GraphError::invalid(
                "margin",
                format!(
                    "margin must be finite, >= 0 and below half the shorter side (got {})",
                    self.margin
                ),
            ));
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::DEFAULT_MARGIN,
        )
    }
}
