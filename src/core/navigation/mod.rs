pub mod command;
pub mod view_state;
