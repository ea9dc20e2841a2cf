use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

// Phase/amplitude constants are aesthetic choices inherited from the
// reference colour scheme; they are kept verbatim so golden images match.
const FREQUENCY: f64 = 10.0;
const GREEN_PHASE: f64 = 2.0;
const BLUE_PHASE: f64 = 4.0;
const AMPLITUDE: f64 = 127.0;
const OFFSET: f64 = 128.0;

#[derive(Debug)]
pub enum SinusoidPaletteConstructorError {
    ZeroBudget,
}

impl fmt::Display for SinusoidPaletteConstructorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroBudget => {
                write!(f, "iteration budget must be greater than zero")
            }
        }
    }
}

impl Error for SinusoidPaletteConstructorError {}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SinusoidPaletteError {
    IterationsExceedBudget { iterations: u32, budget: u32 },
}

impl fmt::Display for SinusoidPaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsExceedBudget { iterations, budget } => {
                write!(
                    f,
                    "iteration count {} exceeds budget {}",
                    iterations, budget
                )
            }
        }
    }
}

impl Error for SinusoidPaletteError {}

/// Periodic palette: each channel is a phase-shifted sinusoid of the
/// normalised escape iteration `t = iterations / budget`. Points that never
/// escape (iterations == budget) are the reserved black.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SinusoidPalette {
    budget: u32,
}

fn channel(t: f64, phase: f64) -> u8 {
    let value = ((FREQUENCY * t + phase).sin() * AMPLITUDE + OFFSET).round();
    value.clamp(0.0, 255.0) as u8
}

impl ColourMap for SinusoidPalette {
    type Failure = SinusoidPaletteError;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure> {
        if iterations > self.budget {
            return Err(SinusoidPaletteError::IterationsExceedBudget {
                iterations,
                budget: self.budget,
            });
        }

        if iterations == self.budget {
            return Ok(Colour::BLACK);
        }

        let t = iterations as f64 / self.budget as f64;

        Ok(Colour {
            r: channel(t, 0.0),
            g: channel(t, GREEN_PHASE),
            b: channel(t, BLUE_PHASE),
        })
    }
}

impl SinusoidPalette {
    pub fn new(budget: u32) -> Result<Self, SinusoidPaletteConstructorError> {
        if budget == 0 {
            return Err(SinusoidPaletteConstructorError::ZeroBudget);
        }

        Ok(Self { budget })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_iterations_map_to_black() {
        let palette = SinusoidPalette::new(100).unwrap();

        assert_eq!(palette.map(100).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_zero_iterations_colour() {
        // t = 0: r = round(sin(0)*127 + 128) = 128,
        //        g = round(sin(2)*127 + 128) = 243,
        //        b = round(sin(4)*127 + 128) = 32
        let palette = SinusoidPalette::new(50).unwrap();

        assert_eq!(
            palette.map(0).unwrap(),
            Colour {
                r: 128,
                g: 243,
                b: 32
            }
        );
    }

    #[test]
    fn test_half_budget_colour() {
        // t = 0.5: r = round(sin(5)*127 + 128) = 6,
        //          g = round(sin(7)*127 + 128) = 211,
        //          b = round(sin(9)*127 + 128) = 180
        let palette = SinusoidPalette::new(100).unwrap();

        assert_eq!(
            palette.map(50).unwrap(),
            Colour {
                r: 6,
                g: 211,
                b: 180
            }
        );
    }

    #[test]
    fn test_zero_iterations_colour_is_budget_independent() {
        let fast = SinusoidPalette::new(50).unwrap();
        let detail = SinusoidPalette::new(200).unwrap();

        assert_eq!(fast.map(0).unwrap(), detail.map(0).unwrap());
    }

    #[test]
    fn test_escaped_points_are_never_black() {
        let palette = SinusoidPalette::new(200).unwrap();

        for iterations in 0..200 {
            assert_ne!(
                palette.map(iterations).unwrap(),
                Colour::BLACK,
                "iteration {} should not use the reserved inside colour",
                iterations
            );
        }
    }

    #[test]
    fn test_iterations_over_budget_fail() {
        let palette = SinusoidPalette::new(10).unwrap();

        assert_eq!(
            palette.map(11),
            Err(SinusoidPaletteError::IterationsExceedBudget {
                iterations: 11,
                budget: 10
            })
        );
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        assert!(matches!(
            SinusoidPalette::new(0),
            Err(SinusoidPaletteConstructorError::ZeroBudget)
        ));
    }
}
