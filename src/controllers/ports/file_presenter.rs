use crate::core::data::pixel_buffer::PixelBuffer;
use std::path::Path;

/// Writes a finished frame to a file.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
