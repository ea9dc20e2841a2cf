use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::colourise::{ColouriseCancelableError, colourise_cancelable};
use crate::core::actions::evaluate_escape_time::{
    EvaluateEscapeTimeError, evaluate_escape_time_cancelable,
};
use crate::core::data::iteration_raster::IterationRasterError;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::raster_size::RasterSize;
use crate::core::data::sample_grid::SampleGrid;
use crate::core::data::viewport::Viewport;
use crate::core::palette::sinusoid::{SinusoidPalette, SinusoidPaletteError};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderFrameError {
    ZeroBudget,
    Raster(IterationRasterError),
    Palette(SinusoidPaletteError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for RenderFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBudget => write!(f, "iteration budget must be greater than zero"),
            Self::Raster(err) => write!(f, "raster error: {}", err),
            Self::Palette(err) => write!(f, "palette error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for RenderFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroBudget => None,
            Self::Raster(err) => Some(err),
            Self::Palette(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

/// Error type for the cancel-aware pipeline: cancellation is expected
/// control flow and kept apart from genuine render failures.
#[derive(Debug)]
pub enum RenderFrameCancelableError {
    Cancelled(Cancelled),
    Failed(RenderFrameError),
}

impl fmt::Display for RenderFrameCancelableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Failed(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderFrameCancelableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Failed(err) => Some(err),
        }
    }
}

/// The end-to-end pipeline: sample grid → escape-time raster → RGB buffer.
///
/// Pure and deterministic: a fixed `(viewport, size, budget)` input yields a
/// byte-identical buffer on every call.
pub fn render_frame(
    viewport: &Viewport,
    size: RasterSize,
    budget: u32,
) -> Result<PixelBuffer, RenderFrameError> {
    // Delegate to the cancel-aware implementation with NeverCancel
    render_frame_cancelable(viewport, size, budget, &NeverCancel).map_err(|e| match e {
        RenderFrameCancelableError::Failed(err) => err,
        RenderFrameCancelableError::Cancelled(_) => {
            // NeverCancel never cancels, so this branch is unreachable
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`render_frame`], but threads a cancellation token through both
/// pipeline stages.
pub fn render_frame_cancelable<C: CancelToken>(
    viewport: &Viewport,
    size: RasterSize,
    budget: u32,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameCancelableError> {
    let palette = SinusoidPalette::new(budget)
        .map_err(|_| RenderFrameCancelableError::Failed(RenderFrameError::ZeroBudget))?;

    let grid = SampleGrid::new(viewport, size);

    let raster = evaluate_escape_time_cancelable(&grid, budget, cancel).map_err(|e| match e {
        EvaluateEscapeTimeError::Cancelled(c) => RenderFrameCancelableError::Cancelled(c),
        EvaluateEscapeTimeError::Raster(err) => {
            RenderFrameCancelableError::Failed(RenderFrameError::Raster(err))
        }
    })?;

    colourise_cancelable(&raster, &palette, cancel).map_err(|e| match e {
        ColouriseCancelableError::Cancelled(c) => RenderFrameCancelableError::Cancelled(c),
        ColouriseCancelableError::ColourMap(err) => {
            RenderFrameCancelableError::Failed(RenderFrameError::Palette(err))
        }
        ColouriseCancelableError::PixelBuffer(err) => {
            RenderFrameCancelableError::Failed(RenderFrameError::PixelBuffer(err))
        }
    })
}
