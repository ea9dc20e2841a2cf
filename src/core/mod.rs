pub mod actions;
pub mod constants;
pub mod data;
pub mod navigation;
pub mod palette;
