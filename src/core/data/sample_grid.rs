use crate::core::data::complex::Complex;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;

/// The discretisation of a viewport into one complex point per pixel.
///
/// Points are stored row-major. Sampling places the first column/row exactly
/// on `x_min`/`y_min` and the last exactly on `x_max`/`y_max`, so the step is
/// `extent / (n - 1)`. A single-pixel axis, or a degenerate viewport extent,
/// collapses to the repeated minimum coordinate instead of dividing by zero.
///
/// Rebuilt fresh for every render; never cached across interactions.
#[derive(Debug)]
pub struct SampleGrid {
    points: Vec<Complex>,
    size: RasterSize,
}

fn axis_step(extent: f64, pixels: u32) -> f64 {
    if pixels > 1 {
        extent / (pixels - 1) as f64
    } else {
        0.0
    }
}

impl SampleGrid {
    #[must_use]
    pub fn new(viewport: &Viewport, size: RasterSize) -> Self {
        let x_step = axis_step(viewport.width(), size.width());
        let y_step = axis_step(viewport.height(), size.height());

        let mut points = Vec::with_capacity(size.cells());

        for row in 0..size.height() {
            let imag = viewport.y_min() + row as f64 * y_step;
            for col in 0..size.width() {
                let real = viewport.x_min() + col as f64 * x_step;
                points.push(Complex { real, imag });
            }
        }

        Self { points, size }
    }

    #[must_use]
    pub fn points(&self) -> &[Complex] {
        &self.points
    }

    #[must_use]
    pub fn size(&self) -> RasterSize {
        self.size
    }
}
