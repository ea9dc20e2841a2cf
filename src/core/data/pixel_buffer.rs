use crate::core::data::raster_size::RasterSize;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn expected_byte_len(size: RasterSize) -> usize {
    size.cells() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    ByteLenMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByteLenMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel buffer expects {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Final RGB output of the render pipeline: 3 bytes per pixel, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: RasterSize,
    bytes: Vec<u8>,
}

impl PixelBuffer {
    pub fn from_bytes(size: RasterSize, bytes: Vec<u8>) -> Result<Self, PixelBufferError> {
        let expected = expected_byte_len(size);

        if bytes.len() != expected {
            return Err(PixelBufferError::ByteLenMismatch {
                expected,
                actual: bytes.len(),
            });
        }

        Ok(Self { size, bytes })
    }

    #[must_use]
    pub fn size(&self) -> RasterSize {
        self.size
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bytes_valid() {
        let size = RasterSize::new(2, 1).unwrap();
        let buffer = PixelBuffer::from_bytes(size, vec![1, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(buffer.size(), size);
        assert_eq!(buffer.bytes(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        let size = RasterSize::new(2, 2).unwrap();

        assert_eq!(
            PixelBuffer::from_bytes(size, vec![0; 11]),
            Err(PixelBufferError::ByteLenMismatch {
                expected: 12,
                actual: 11
            })
        );
    }
}
