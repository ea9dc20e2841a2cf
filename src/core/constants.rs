use crate::core::data::viewport::Viewport;

/// Default iteration budget, also the "fast" quality preset.
pub const DEFAULT_BUDGET: u32 = 50;
pub const BUDGET_PRESET_FAST: u32 = 50;
pub const BUDGET_PRESET_QUALITY: u32 = 100;
pub const BUDGET_PRESET_DETAIL: u32 = 200;

pub const DEFAULT_RASTER_WIDTH: u32 = 800;
pub const DEFAULT_RASTER_HEIGHT: u32 = 600;

/// Zoom-out safety window: each viewport bound is clamped into
/// `[-PLANE_BOUND, PLANE_BOUND]`.
pub const PLANE_BOUND: f64 = 10.0;

/// Extent scale applied by one zoom step (halve in, double out).
pub const ZOOM_FACTOR: f64 = 2.0;

/// Classic Mandelbrot view.
#[must_use]
pub fn default_viewport() -> Viewport {
    Viewport::new(-2.5, 1.5, -1.5, 1.5).expect("default viewport bounds are valid")
}
