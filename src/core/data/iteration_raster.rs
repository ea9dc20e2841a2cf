use crate::core::data::raster_size::RasterSize;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationRasterError {
    SizeMismatch { expected: usize, actual: usize },
    ValueExceedsBudget { value: u32, budget: u32 },
}

impl fmt::Display for IterationRasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "raster expects {} iteration values, got {}",
                    expected, actual
                )
            }
            Self::ValueExceedsBudget { value, budget } => {
                write!(f, "iteration value {} exceeds budget {}", value, budget)
            }
        }
    }
}

impl Error for IterationRasterError {}

/// Per-pixel escape-iteration counts for one render.
///
/// A value equal to `budget` means the point never escaped (inside the set);
/// any lesser value `k` is the first iteration index at which the orbit
/// magnitude exceeded the escape radius.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IterationRaster {
    values: Vec<u32>,
    size: RasterSize,
    budget: u32,
}

impl IterationRaster {
    pub fn from_values(
        size: RasterSize,
        budget: u32,
        values: Vec<u32>,
    ) -> Result<Self, IterationRasterError> {
        if values.len() != size.cells() {
            return Err(IterationRasterError::SizeMismatch {
                expected: size.cells(),
                actual: values.len(),
            });
        }

        if let Some(&value) = values.iter().find(|&&value| value > budget) {
            return Err(IterationRasterError::ValueExceedsBudget { value, budget });
        }

        Ok(Self {
            values,
            size,
            budget,
        })
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn size(&self) -> RasterSize {
        self.size
    }

    #[must_use]
    pub fn budget(&self) -> u32 {
        self.budget
    }
}
