pub mod colour;
pub mod complex;
pub mod iteration_raster;
pub mod pixel_buffer;
pub mod point;
pub mod raster_size;
pub mod sample_grid;
pub mod viewport;
