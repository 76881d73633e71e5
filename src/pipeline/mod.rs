//! Frame Pipeline
//!
//! Connects the scene tree to a drawing surface for one frame.
//!
//! ```text
//! NodeTree --recompute--> LayoutResults --draw--> Surface
//! ```
//!
//! 1. **recompute** - lay out the root at the logical viewport size
//! 2. **scale** - map logical units onto device pixels
//! 3. **clear** - optionally wipe the previous frame
//! 4. **draw** - paint the tree
//!
//! The surface transform is saved before step 2 and restored afterwards, so
//! frames can be rendered back to back onto the same surface.

mod frame;

pub use frame::{render_frame, FrameOptions};
