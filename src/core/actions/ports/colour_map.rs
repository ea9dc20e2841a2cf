use crate::core::data::colour::Colour;
use std::error::Error;

/// Maps an escape-iteration count to a display colour.
pub trait ColourMap {
    type Failure: Error + 'static;

    fn map(&self, iterations: u32) -> Result<Colour, Self::Failure>;
}
