//! Port definitions for the interactive controller: the interfaces between
//! the render worker and the presentation layer.

pub mod presenter;
