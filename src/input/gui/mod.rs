//! GUI input adapter for interactive Mandelbrot exploration.
//!
//! Uses winit for window management and pixels for framebuffer rendering.
//! Navigation is mouse-driven (click to zoom, drag to select a region) with
//! keyboard shortcuts for iteration budget presets and reset.

mod app;
pub mod events;

pub use app::run_gui;
