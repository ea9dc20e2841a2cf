pub mod cancellation;
pub mod colourise;
pub mod evaluate_escape_time;
pub mod ports;
pub mod render_frame;
