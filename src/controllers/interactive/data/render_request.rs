use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;

/// One render job: everything the worker needs to produce a frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub viewport: Viewport,
    pub size: RasterSize,
    pub budget: u32,
}
