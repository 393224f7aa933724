//! Clock face rendering
//!
//! The face is described as a list of draw commands by a pure renderer and
//! replayed onto any [`surface::DrawingSurface`].

pub mod canvas;
pub mod renderer;
pub mod scene;
pub mod surface;

pub use renderer::render_face;
pub use scene::DrawList;
pub use surface::{DrawingSurface, Painter};
