use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame;
use crate::core::constants::{DEFAULT_BUDGET, DEFAULT_RASTER_HEIGHT, DEFAULT_RASTER_WIDTH, default_viewport};
use crate::core::data::raster_size::RasterSize;

/// Renders the classic Mandelbrot view at the default size and budget and
/// hands the frame to a file presenter.
pub fn still_frame_controller<P: FilePresenterPort>(
    presenter: &P,
    filepath: impl AsRef<Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let size = RasterSize::new(DEFAULT_RASTER_WIDTH, DEFAULT_RASTER_HEIGHT)?;
    let viewport = default_viewport();
    let budget = DEFAULT_BUDGET;

    println!("Rendering Mandelbrot set...");
    println!("Image size: {}x{}", size.width(), size.height());
    println!("Iteration budget: {}", budget);

    let start = Instant::now();
    let buffer = render_frame(&viewport, size, budget)?;
    let duration = start.elapsed();

    println!("Duration:   {:?}", duration);

    presenter.present(&buffer, &filepath)?;
    println!("Saved to {}", filepath.as_ref().display());

    Ok(())
}
