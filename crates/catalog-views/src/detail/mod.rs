//! Detail View: one product with images, specs and reviews.

mod date;
mod screen;
mod sections;

pub use date::*;
pub use screen::*;
pub use sections::*;
