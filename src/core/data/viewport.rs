use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    InvertedBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "viewport bounds must be finite: x [{}, {}] y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
            Self::InvertedBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            } => {
                write!(
                    f,
                    "viewport bounds must be ordered: x [{}, {}] y [{}, {}]",
                    x_min, x_max, y_min, y_max
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// The rectangle of the complex plane currently being rendered.
///
/// Bounds are ordered (`x_min <= x_max`, `y_min <= y_max`) and finite.
/// Degenerate viewports (zero width and/or height) are representable: a
/// zero-area drag selection produces one, and the sample grid collapses the
/// zero extent to a repeated coordinate instead of faulting.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return Err(ViewportError::NonFiniteBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        if x_min > x_max || y_min > y_max {
            return Err(ViewportError::InvertedBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Builds the viewport of the given extent centred on `(cx, cy)`.
    ///
    /// Infallible on purpose: navigation operations derive their inputs from
    /// an existing (finite) viewport, so the result is always ordered.
    #[must_use]
    pub fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self {
            x_min: cx - width / 2.0,
            x_max: cx + width / 2.0,
            y_min: cy - height / 2.0,
            y_max: cy + height / 2.0,
        }
    }

    /// Builds the viewport spanned by two plane-space corner points, in any
    /// corner order. A coincident pair yields a degenerate viewport.
    #[must_use]
    pub fn spanned(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x_min: x1.min(x2),
            x_max: x1.max(x2),
            y_min: y1.min(y2),
            y_max: y1.max(y2),
        }
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Clamps each of the four bounds independently into `[-bound, bound]`.
    ///
    /// Independent clamping may distort the aspect ratio at the boundary;
    /// that matches the reference zoom-out behaviour and is deliberate.
    #[must_use]
    pub fn clamped(&self, bound: f64) -> Self {
        Self {
            x_min: self.x_min.max(-bound),
            x_max: self.x_max.min(bound),
            y_min: self.y_min.max(-bound),
            y_max: self.y_max.min(bound),
        }
    }
}
