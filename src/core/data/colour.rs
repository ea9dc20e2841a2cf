#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Reserved colour for points that never escape (inside the set).
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };
}
