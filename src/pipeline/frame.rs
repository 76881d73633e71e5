//! One frame: layout, then paint under a device-scale transform.

use tracing::debug;

use crate::error::Result;
use crate::geometry::Rect;
use crate::layout::LayoutEngine;
use crate::renderer::{SavedState, Surface};
use crate::tree::{NodeId, NodeTree};

/// Viewport of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOptions {
    /// Logical width the root is laid out at.
    pub width: f32,
    /// Logical height the root is laid out at.
    pub height: f32,
    /// Device pixels per logical unit.
    pub scale: f32,
    /// Clear the logical viewport before drawing.
    pub clear: bool,
}

impl FrameOptions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, scale: 1.0, clear: true }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

/// Lay out and paint `root` onto `surface`.
///
/// Nothing is drawn if the layout pass fails.
pub fn render_frame(
    tree: &mut NodeTree,
    engine: &mut dyn LayoutEngine,
    root: NodeId,
    surface: &mut dyn Surface,
    options: &FrameOptions,
) -> Result<()> {
    debug!(width = options.width, height = options.height, scale = options.scale, "render frame");
    tree.recompute(engine, root, options.width, options.height)?;

    let mut saved = SavedState::new(surface);
    saved.scale(options.scale, options.scale);
    if options.clear {
        saved.clear(Rect::new(0.0, 0.0, options.width, options.height));
    }
    tree.draw(&mut *saved, root)
}
