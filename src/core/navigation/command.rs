use crate::core::data::point::Point;

/// The full set of user interactions the viewport controller understands.
///
/// Input devices translate their events into these values; the controller
/// dispatches them through one synchronous handler.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Halve both extents around the plane point under this pixel.
    ZoomIn(Point),
    /// Double both extents around the plane point under this pixel, then
    /// clamp into the safety window.
    ZoomOut(Point),
    /// Start a rectangular selection at this pixel.
    BeginDrag(Point),
    /// Move the live corner of the selection to this pixel.
    UpdateDrag(Point),
    /// Commit the selection ending at this pixel as the new viewport.
    EndDrag(Point),
    /// Return to the initial viewport and default budget.
    Reset,
    /// Change the iteration budget; zero is rejected.
    SetBudget(u32),
}
