//! Layout Module
//!
//! Flexbox layout for the scene tree, behind a narrow engine interface.
//!
//! # Architecture
//!
//! [`LayoutEngine`] exposes exactly what a layout pass needs: create/free a node,
//! per-attribute setters, a measure callback for text leaves, child insertion,
//! one compute call and read-back of the computed geometry. [`TaffyEngine`]
//! implements it with [Taffy](https://github.com/DioxusLabs/taffy).
//!
//! The scene tree drives a pass in four phases:
//!
//! 1. Build an engine node per scene node and push resolved styles into it
//! 2. Compute layout once at the root
//! 3. Read bounds and content rects back into the scene nodes
//! 4. Free every engine node
//!
//! # Example
//!
//! ```ignore
//! use spark_canvas::layout::TaffyEngine;
//!
//! let mut engine = TaffyEngine::new();
//! tree.recompute(&mut engine, root, 800.0, 600.0)?;
//! assert_eq!(engine.live_nodes(), 0);
//! ```

mod engine;
mod taffy_bridge;

pub use engine::*;
pub use taffy_bridge::TaffyEngine;
