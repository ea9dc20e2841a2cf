mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::interactive::InteractiveController;
pub use controllers::interactive::data::render_request::RenderRequest;
pub use controllers::interactive::events::render::RenderEvent;
pub use controllers::interactive::ports::presenter::PresenterPort;
pub use controllers::still::still_frame_controller;
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;

// Pipeline pieces exposed for benchmarks.
pub use crate::core::actions::colourise::colourise;
pub use crate::core::actions::evaluate_escape_time::evaluate_escape_time;
pub use crate::core::actions::render_frame::render_frame;
pub use crate::core::data::raster_size::RasterSize;
pub use crate::core::data::sample_grid::SampleGrid;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::palette::sinusoid::SinusoidPalette;
