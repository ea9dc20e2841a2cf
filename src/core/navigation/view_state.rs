use crate::core::constants::{DEFAULT_BUDGET, PLANE_BOUND, ZOOM_FACTOR, default_viewport};
use crate::core::data::point::Point;
use crate::core::data::raster_size::RasterSize;
use crate::core::data::viewport::Viewport;
use crate::core::navigation::command::NavigationCommand;

/// An in-progress rectangular drag selection, in pixel space.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DragSelection {
    pub start: Point,
    pub current: Point,
}

/// The full mutable state of the viewer between interactions: the visible
/// viewport, the iteration budget, and any in-progress drag selection.
///
/// Single-writer: commands mutate the state only through [`ViewState::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    viewport: Viewport,
    budget: u32,
    drag: Option<DragSelection>,
}

/// Maps a pixel to its plane-space point under the given viewport and raster
/// dimensions.
///
/// Divides by `width`/`height` (not `width - 1`): that is the reference
/// navigation mapping, and it makes a full-canvas drag the identity. The
/// sample grid uses the `width - 1` spacing instead; the two are deliberately
/// different.
#[must_use]
pub fn pixel_to_plane(pixel: Point, viewport: &Viewport, size: RasterSize) -> (f64, f64) {
    let x = viewport.x_min() + f64::from(pixel.x) * viewport.width() / f64::from(size.width());
    let y = viewport.y_min() + f64::from(pixel.y) * viewport.height() / f64::from(size.height());

    (x, y)
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            budget: DEFAULT_BUDGET,
            drag: None,
        }
    }
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// The live selection, if a drag is in progress. The presenter reads
    /// this to draw the overlay rectangle.
    #[must_use]
    pub fn drag(&self) -> Option<DragSelection> {
        self.drag
    }

    /// Dispatches one navigation command against the raster the pixel
    /// coordinates refer to. Returns whether the change warrants a
    /// re-render of the fractal.
    pub fn apply(&mut self, command: NavigationCommand, size: RasterSize) -> bool {
        match command {
            NavigationCommand::ZoomIn(pixel) => {
                self.viewport = self.zoomed(pixel, size, 1.0 / ZOOM_FACTOR);
                true
            }
            NavigationCommand::ZoomOut(pixel) => {
                self.viewport = self.zoomed(pixel, size, ZOOM_FACTOR).clamped(PLANE_BOUND);
                true
            }
            NavigationCommand::BeginDrag(pixel) => {
                self.drag = Some(DragSelection {
                    start: pixel,
                    current: pixel,
                });
                false
            }
            NavigationCommand::UpdateDrag(pixel) => {
                match &mut self.drag {
                    Some(selection) => selection.current = pixel,
                    // a stray motion event starts the selection, as in the
                    // reference behaviour
                    None => {
                        self.drag = Some(DragSelection {
                            start: pixel,
                            current: pixel,
                        });
                    }
                }
                false
            }
            NavigationCommand::EndDrag(pixel) => match self.drag.take() {
                Some(selection) => {
                    let (x1, y1) = pixel_to_plane(selection.start, &self.viewport, size);
                    let (x2, y2) = pixel_to_plane(pixel, &self.viewport, size);
                    self.viewport = Viewport::spanned(x1, y1, x2, y2);
                    true
                }
                None => false,
            },
            NavigationCommand::Reset => {
                self.viewport = default_viewport();
                self.budget = DEFAULT_BUDGET;
                self.drag = None;
                true
            }
            NavigationCommand::SetBudget(budget) => {
                if budget == 0 {
                    return false;
                }
                self.budget = budget;
                true
            }
        }
    }

    fn zoomed(&self, pixel: Point, size: RasterSize, scale: f64) -> Viewport {
        let (cx, cy) = pixel_to_plane(pixel, &self.viewport, size);

        Viewport::from_center(
            cx,
            cy,
            self.viewport.width() * scale,
            self.viewport.height() * scale,
        )
    }
}
