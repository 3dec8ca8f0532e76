//! Catalog View: product grid with category filter and price sort.

mod derive;
mod render;
mod screen;
mod state;

pub use derive::*;
pub use render::*;
pub use screen::*;
pub use state::*;
