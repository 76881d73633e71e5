//! Canvas Renderer
//!
//! Painting primitives for the scene tree:
//!
//! - [`Surface`] - the 2D drawing target (canvas-style path API)
//! - [`SavedState`] / [`Translation`] - scoped transform guards
//! - [`draw_box`] - rounded, filled boxes
//! - [`DisplayList`] - a recording surface for replay and tests

mod display_list;
mod shapes;
mod surface;

pub use display_list::{DisplayList, DrawCommand, Transform};
pub use shapes::{draw_box, trace_rounded_rect};
pub use surface::{SavedState, Surface, Translation};
