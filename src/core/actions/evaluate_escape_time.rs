use rayon::prelude::*;

use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::data::complex::Complex;
use crate::core::data::iteration_raster::{IterationRaster, IterationRasterError};
use crate::core::data::sample_grid::SampleGrid;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Error type for cancel-aware escape-time evaluation.
#[derive(Debug)]
pub enum EvaluateEscapeTimeError {
    /// The render was cancelled before completion.
    Cancelled(Cancelled),
    /// The computed values could not be packed into a raster.
    Raster(IterationRasterError),
}

impl std::fmt::Display for EvaluateEscapeTimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Raster(err) => write!(f, "raster error: {}", err),
        }
    }
}

impl std::error::Error for EvaluateEscapeTimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::Raster(err) => Some(err),
        }
    }
}

/// One point's orbit state during lockstep evaluation.
///
/// `escaped_at == budget` doubles as the "still active" sentinel while the
/// evaluation runs; it is also the final value for points that never escape.
struct OrbitCell {
    c: Complex,
    z: Complex,
    escaped_at: u32,
}

/// Computes the escape-time raster for every point of the grid.
///
/// All orbits advance in lockstep: each pass applies `z ← z² + c` once to
/// every point that has not yet escaped, records the pass index for points
/// whose magnitude first exceeds the escape radius, and stops early once no
/// active point remains. An escaped point's recorded index is never touched
/// again, so early termination cannot change any result.
///
/// For cancel-aware evaluation, use [`evaluate_escape_time_cancelable`].
pub fn evaluate_escape_time(
    grid: &SampleGrid,
    budget: u32,
) -> Result<IterationRaster, IterationRasterError> {
    // Delegate to the cancel-aware implementation with NeverCancel
    evaluate_escape_time_cancelable(grid, budget, &NeverCancel).map_err(|e| match e {
        EvaluateEscapeTimeError::Raster(err) => err,
        EvaluateEscapeTimeError::Cancelled(_) => {
            // NeverCancel never cancels, so this branch is unreachable
            unreachable!("NeverCancel token should never signal cancellation")
        }
    })
}

/// Like [`evaluate_escape_time`], but polls a cancellation token once per
/// lockstep pass and aborts with `Cancelled` instead of finishing the raster.
pub fn evaluate_escape_time_cancelable<C: CancelToken>(
    grid: &SampleGrid,
    budget: u32,
    cancel: &C,
) -> Result<IterationRaster, EvaluateEscapeTimeError> {
    let mut cells: Vec<OrbitCell> = grid
        .points()
        .iter()
        .map(|&c| OrbitCell {
            c,
            z: Complex::ZERO,
            escaped_at: budget,
        })
        .collect();

    for step in 0..budget {
        if cancel.is_cancelled() {
            return Err(EvaluateEscapeTimeError::Cancelled(Cancelled));
        }

        let any_active = cells
            .par_iter_mut()
            .map(|cell| advance(cell, step, budget))
            .reduce(|| false, |a, b| a | b);

        if !any_active {
            break;
        }
    }

    let values: Vec<u32> = cells.iter().map(|cell| cell.escaped_at).collect();

    IterationRaster::from_values(grid.size(), budget, values)
        .map_err(EvaluateEscapeTimeError::Raster)
}

/// Advances one orbit by a single step. Returns whether the cell is still
/// active afterwards.
fn advance(cell: &mut OrbitCell, step: u32, budget: u32) -> bool {
    if cell.escaped_at != budget {
        return false;
    }

    cell.z = cell.z * cell.z + cell.c;

    if cell.z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
        cell.escaped_at = step;
        return false;
    }

    true
}
