use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::iteration_raster::IterationRaster;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ColouriseError<E> {
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for ColouriseError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for ColouriseError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Error type for cancel-aware colourisation.
///
/// Cancellation is expected control flow, not a failure to display.
#[derive(Debug)]
pub enum ColouriseCancelableError<E> {
    Cancelled(Cancelled),
    ColourMap(E),
    PixelBuffer(PixelBufferError),
}

impl<E: fmt::Display> fmt::Display for ColouriseCancelableError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for ColouriseCancelableError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Turns an iteration raster into an RGB pixel buffer through a colour map.
///
/// For cancel-aware colourisation, use [`colourise_cancelable`].
pub fn colourise<M: ColourMap>(
    raster: &IterationRaster,
    mapper: &M,
) -> Result<PixelBuffer, ColouriseError<M::Failure>> {
    // Delegate to the cancel-aware implementation with NeverCancel
    colourise_cancelable(raster, mapper, &NeverCancel).map_err(|e| match e {
        ColouriseCancelableError::ColourMap(err) => ColouriseError::ColourMap(err),
        ColouriseCancelableError::PixelBuffer(err) => ColouriseError::PixelBuffer(err),
        ColouriseCancelableError::Cancelled(_) => {
            // NeverCancel never cancels, so this branch is unreachable
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`colourise`], but polls the cancel token every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] pixels.
///
/// Streams RGB bytes into a preallocated buffer; a cancelled render never
/// produces a partial pixel buffer.
pub fn colourise_cancelable<M, C>(
    raster: &IterationRaster,
    mapper: &M,
    cancel: &C,
) -> Result<PixelBuffer, ColouriseCancelableError<M::Failure>>
where
    M: ColourMap,
    C: CancelToken,
{
    let mut bytes: Vec<u8> = Vec::with_capacity(raster.size().cells() * 3);

    for (i, &iterations) in raster.values().iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(ColouriseCancelableError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper
            .map(iterations)
            .map_err(ColouriseCancelableError::ColourMap)?;

        bytes.push(r);
        bytes.push(g);
        bytes.push(b);
    }

    PixelBuffer::from_bytes(raster.size(), bytes).map_err(ColouriseCancelableError::PixelBuffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::raster_size::RasterSize;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError;

    impl fmt::Display for StubError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct GreyscaleStub;

    impl ColourMap for GreyscaleStub {
        type Failure = StubError;

        fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
            let v = iterations as u8;
            Ok(Colour { r: v, g: v, b: v })
        }
    }

    #[derive(Debug)]
    struct FailingStub;

    impl ColourMap for FailingStub {
        type Failure = StubError;

        fn map(&self, _: u32) -> Result<Colour, Self::Failure> {
            Err(StubError)
        }
    }

    fn raster() -> IterationRaster {
        let size = RasterSize::new(3, 2).unwrap();
        IterationRaster::from_values(size, 10, vec![0, 1, 2, 3, 4, 10]).unwrap()
    }

    #[test]
    fn test_colourise_maps_every_cell() {
        let buffer = colourise(&raster(), &GreyscaleStub).unwrap();

        assert_eq!(
            buffer.bytes(),
            &[0, 0, 0, 1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4, 10, 10, 10]
        );
        assert_eq!(buffer.size(), raster().size());
    }

    #[test]
    fn test_colourise_propagates_colour_map_failure() {
        let result = colourise(&raster(), &FailingStub);

        assert!(matches!(result, Err(ColouriseError::ColourMap(StubError))));
    }

    #[test]
    fn test_cancelled_token_aborts_colourise() {
        let cancelled = AtomicBool::new(true);
        let token = || cancelled.load(Ordering::Relaxed);

        let result = colourise_cancelable(&raster(), &GreyscaleStub, &token);

        assert!(matches!(
            result,
            Err(ColouriseCancelableError::Cancelled(_))
        ));
    }

    #[test]
    fn test_cancelable_error_displays_cancelled() {
        let err: ColouriseCancelableError<StubError> =
            ColouriseCancelableError::Cancelled(Cancelled);

        assert_eq!(format!("{}", err), "render cancelled");
    }
}
