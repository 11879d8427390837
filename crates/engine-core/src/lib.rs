//! engine-core: geometry, color, draw recording and text measurement shared by
//! the lattice widgets.

pub mod dpi;

mod color;
mod display_list;
mod painter;
mod scene;
mod text;

pub use display_list::*;
pub use painter::*;
pub use scene::*;
pub use text::*;
